use std::mem;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 2] {
        let ary: &[f32; 2] = unsafe { mem::transmute(self) };
        ary
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 3] {
        let ary: &[f32; 3] = unsafe { mem::transmute(self) };
        ary
    }
}
