//! Phong materials
//!
//! Every actor owns one [`Material`] by value. The backend receives it through
//! the draw command and uploads it as a [`MaterialUniform`].

/// GPU uniform data for materials
///
/// Colors are padded to `vec4` so the layout matches std140.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub emission: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
    _padding: [f32; 3],
}

/// Material definition for Phong shading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub emission: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emission: [0.0, 0.0, 0.0],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.0, 0.0, 0.0],
            shininess: 0.0,
        }
    }
}

impl Material {
    /// Creates a material with the given diffuse color and defaults elsewhere.
    pub fn new(diffuse: [f32; 3]) -> Self {
        Self {
            diffuse,
            ..Self::default()
        }
    }

    /// Builder pattern: Set emission color
    pub fn with_emission(mut self, emission: [f32; 3]) -> Self {
        self.emission = emission;
        self
    }

    /// Builder pattern: Set ambient reflectance
    pub fn with_ambient(mut self, ambient: [f32; 3]) -> Self {
        self.ambient = ambient;
        self
    }

    /// Builder pattern: Set diffuse color
    pub fn with_diffuse(mut self, diffuse: [f32; 3]) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Builder pattern: Set specular color and exponent
    pub fn with_specular(mut self, specular: [f32; 3], shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess.max(0.0);
        self
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        let pad = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        MaterialUniform {
            emission: pad(self.emission),
            ambient: pad(self.ambient),
            diffuse: pad(self.diffuse),
            specular: pad(self.specular),
            shininess: self.shininess,
            _padding: [0.0; 3],
        }
    }
}
