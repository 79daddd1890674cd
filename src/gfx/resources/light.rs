//! Scene light
//!
//! A single Phong light. As a head-light it follows the camera and its
//! position is given in eye space; otherwise it is fixed in world space.
//! The directional flag turns the position into a direction (`w = 0`).

/// Light uniform content. MUST match the light block in the shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// 1.0 when the position is in eye space
    pub head_light: f32,
    _padding: [f32; 3],
}

/// Light configuration
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub head_light: bool,
    pub directional: bool,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [1.0, 1.0, 1.0],
            specular: [1.0, 1.0, 1.0],
            head_light: true,
            directional: false,
        }
    }
}

impl Light {
    pub fn toggle_head_light(&mut self) -> bool {
        self.head_light = !self.head_light;
        self.head_light
    }

    pub fn toggle_directional(&mut self) -> bool {
        self.directional = !self.directional;
        self.directional
    }

    /// Homogeneous position, `w = 0` for directional lights.
    pub fn homogeneous_position(&self) -> [f32; 4] {
        let w = if self.directional { 0.0 } else { 1.0 };
        [self.position[0], self.position[1], self.position[2], w]
    }

    pub fn to_uniform(&self) -> LightUniform {
        let pad = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        LightUniform {
            position: self.homogeneous_position(),
            ambient: pad(self.ambient),
            diffuse: pad(self.diffuse),
            specular: pad(self.specular),
            head_light: if self.head_light { 1.0 } else { 0.0 },
            _padding: [0.0; 3],
        }
    }
}
