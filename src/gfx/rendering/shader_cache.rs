//! Shader program registry
//!
//! The backend compiles every [`ProgramKind`] once through a
//! [`ShaderCompiler`]; the resulting [`ShaderCache`] is then shared (as an
//! `Rc<ShaderCache>` or `&dyn ShaderProvider`) with the scene and its actors,
//! which only ever look programs up.

use std::fmt;

use log::info;

use crate::error::ShaderError;

/// Where a program reads its surface color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSource {
    /// The material bound with the draw command
    UniformMaterial,
    /// The per-vertex color attribute
    AttributeColor,
}

/// Lighting model of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    Unlit,
    /// Phong with interpolated normals
    Phong,
    /// Phong with one normal per primitive
    PhongFlat,
}

/// Every program the viewer draws with.
///
/// The six base programs come in a plain and a tessellation variant, the
/// latter used by actors with patch topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramKind {
    pub source: ColorSource,
    pub shading: Shading,
    pub tessellated: bool,
}

impl ProgramKind {
    pub const COUNT: usize = 12;

    pub const fn new(source: ColorSource, shading: Shading, tessellated: bool) -> Self {
        Self {
            source,
            shading,
            tessellated,
        }
    }

    /// All program kinds, in [`ProgramKind::index`] order.
    pub fn all() -> [ProgramKind; Self::COUNT] {
        let mut kinds = [ProgramKind::new(ColorSource::UniformMaterial, Shading::Unlit, false);
            Self::COUNT];
        let mut i = 0;
        for tessellated in [false, true] {
            for source in [ColorSource::UniformMaterial, ColorSource::AttributeColor] {
                for shading in [Shading::Unlit, Shading::Phong, Shading::PhongFlat] {
                    kinds[i] = ProgramKind::new(source, shading, tessellated);
                    i += 1;
                }
            }
        }
        kinds
    }

    /// Dense index in `0..COUNT`.
    pub fn index(&self) -> usize {
        let shading = match self.shading {
            Shading::Unlit => 0,
            Shading::Phong => 1,
            Shading::PhongFlat => 2,
        };
        let source = match self.source {
            ColorSource::UniformMaterial => 0,
            ColorSource::AttributeColor => 1,
        };
        usize::from(self.tessellated) * 6 + source * 3 + shading
    }

    /// Program name as the backend registers it, e.g. `attribute_color_phong_flat`.
    pub fn name(&self) -> String {
        let source = match self.source {
            ColorSource::UniformMaterial => "uniform_material",
            ColorSource::AttributeColor => "attribute_color",
        };
        let shading = match self.shading {
            Shading::Unlit => "",
            Shading::Phong => "_phong",
            Shading::PhongFlat => "_phong_flat",
        };
        let tessellation = if self.tessellated { "_tessellation" } else { "" };
        format!("{source}{shading}{tessellation}")
    }
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Handle of a compiled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderProgram {
    pub kind: ProgramKind,
    /// Backend-defined identifier
    pub handle: u32,
}

/// Backend hook that turns a program kind into a compiled program.
pub trait ShaderCompiler {
    fn compile(&mut self, kind: ProgramKind) -> Result<u32, String>;
}

/// Read-only program lookup handed to actors.
pub trait ShaderProvider {
    fn program(&self, kind: ProgramKind) -> ShaderProgram;
}

/// Every program compiled once, up front.
#[derive(Debug)]
pub struct ShaderCache {
    programs: Vec<ShaderProgram>,
}

impl ShaderCache {
    /// Compiles all program kinds. Fails on the first program the backend
    /// rejects.
    pub fn new(compiler: &mut dyn ShaderCompiler) -> Result<Self, ShaderError> {
        let programs = ProgramKind::all()
            .into_iter()
            .map(|kind| {
                compiler
                    .compile(kind)
                    .map(|handle| ShaderProgram { kind, handle })
                    .map_err(|message| ShaderError::Compile { kind, message })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("compiled {} shader programs", programs.len());
        Ok(Self { programs })
    }

    /// A cache whose handles are the program indices, for running without a GPU.
    pub fn headless() -> Self {
        let programs = ProgramKind::all()
            .into_iter()
            .map(|kind| ShaderProgram {
                kind,
                handle: kind.index() as u32,
            })
            .collect();
        Self { programs }
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl ShaderProvider for ShaderCache {
    fn program(&self, kind: ProgramKind) -> ShaderProgram {
        self.programs[kind.index()]
    }
}

/// Compiler that hands out consecutive handles.
#[derive(Debug, Default)]
pub struct SequentialCompiler {
    next: u32,
}

impl ShaderCompiler for SequentialCompiler {
    fn compile(&mut self, _kind: ProgramKind) -> Result<u32, String> {
        self.next += 1;
        Ok(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct RejectTessellation;

    impl ShaderCompiler for RejectTessellation {
        fn compile(&mut self, kind: ProgramKind) -> Result<u32, String> {
            if kind.tessellated {
                Err("tessellation stages unsupported".to_string())
            } else {
                Ok(kind.index() as u32)
            }
        }
    }

    #[test]
    fn test_kind_indices_are_dense() {
        let indices: HashSet<usize> = ProgramKind::all().iter().map(|k| k.index()).collect();
        assert_eq!(indices.len(), ProgramKind::COUNT);
        for (i, kind) in ProgramKind::all().iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_cache_compiles_every_program_once() {
        let mut compiler = SequentialCompiler::default();
        let cache = ShaderCache::new(&mut compiler).unwrap();

        assert_eq!(cache.len(), ProgramKind::COUNT);
        assert_eq!(compiler.next, ProgramKind::COUNT as u32);

        let kind = ProgramKind::new(ColorSource::AttributeColor, Shading::PhongFlat, true);
        assert_eq!(cache.program(kind).kind, kind);
    }

    #[test]
    fn test_compile_failure_is_reported() {
        let err = ShaderCache::new(&mut RejectTessellation).unwrap_err();
        let ShaderError::Compile { kind, .. } = err;
        assert!(kind.tessellated);
    }

    #[test]
    fn test_program_names() {
        let kind = ProgramKind::new(ColorSource::UniformMaterial, Shading::Phong, false);
        assert_eq!(kind.name(), "uniform_material_phong");
        let kind = ProgramKind::new(ColorSource::AttributeColor, Shading::Unlit, true);
        assert_eq!(kind.to_string(), "attribute_color_tessellation");
    }
}
