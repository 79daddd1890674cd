//! # OBJ Model Loading
//!
//! Wavefront OBJ files (with their MTL libraries) are parsed by `tobj` and
//! expanded into a non-indexed triangle list:
//!
//! - polygons are fan-triangulated, so a quad over four positions becomes six
//!   emitted vertices;
//! - every emitted vertex carries the diffuse color (`Kd`) of its face's
//!   material, or [`DEFAULT_OBJ_COLOR`] when no material resolves;
//! - vertices without a normal reference use their normalized position.
//!
//! Texture coordinates are kept only when every face references them.

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use super::{primitives::normalized, GeometryData};
use crate::error::GeometryError;

/// Color of faces whose material cannot be resolved.
pub const DEFAULT_OBJ_COLOR: [f32; 3] = [0.5, 0.5, 0.0];

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ..Default::default()
    }
}

/// Load an OBJ file and the MTL libraries it references.
pub fn load_obj(path: &Path) -> Result<GeometryData, GeometryError> {
    if !path.is_file() {
        return Err(GeometryError::MissingFile(path.to_path_buf()));
    }

    let (models, materials) =
        tobj::load_obj(path, &load_options()).map_err(|source| GeometryError::Obj {
            path: path.to_path_buf(),
            source,
        })?;

    let materials = materials.unwrap_or_else(|err| {
        warn!("materials for {} unavailable: {err}", path.display());
        Vec::new()
    });

    expand_models(path, &models, &materials)
}

/// Load an OBJ model from any buffered reader.
///
/// `label` names the source in errors. `material_loader` resolves `mtllib`
/// statements, typically through [`tobj::load_mtl_buf`].
pub fn load_obj_from_reader<R, ML>(
    reader: &mut R,
    label: &Path,
    material_loader: ML,
) -> Result<GeometryData, GeometryError>
where
    R: BufRead,
    ML: Fn(&Path) -> tobj::MTLLoadResult,
{
    let (models, materials) =
        tobj::load_obj_buf(reader, &load_options(), material_loader).map_err(|source| {
            GeometryError::Obj {
                path: label.to_path_buf(),
                source,
            }
        })?;

    let materials = materials.unwrap_or_else(|err| {
        warn!("materials for {} unavailable: {err}", label.display());
        Vec::new()
    });

    expand_models(label, &models, &materials)
}

fn expand_models(
    path: &Path,
    models: &[tobj::Model],
    materials: &[tobj::Material],
) -> Result<GeometryData, GeometryError> {
    let mut data = GeometryData::new();
    let mut all_textured = true;

    for model in models {
        let mesh = &model.mesh;
        let position_count = mesh.positions.len() / 3;
        let normal_count = mesh.normals.len() / 3;
        let texcoord_count = mesh.texcoords.len() / 2;

        let color = mesh
            .material_id
            .and_then(|id| materials.get(id))
            .and_then(|material| material.diffuse)
            .unwrap_or(DEFAULT_OBJ_COLOR);

        let has_normals = !mesh.normal_indices.is_empty();
        let has_texcoords = !mesh.texcoord_indices.is_empty();
        all_textured &= has_texcoords;

        for (corner, &index) in mesh.indices.iter().enumerate() {
            let index = index as usize;
            let position = vec3_at(&mesh.positions, index, position_count)?;
            data.vertices.push(position);
            data.colors.push(color);

            let normal = if has_normals {
                let normal_index = lookup(&mesh.normal_indices, corner)?;
                vec3_at(&mesh.normals, normal_index, normal_count)?
            } else {
                position
            };
            data.normals.push(normalized(normal));

            if has_texcoords {
                let tex_index = lookup(&mesh.texcoord_indices, corner)?;
                if tex_index >= texcoord_count {
                    return Err(GeometryError::IndexOutOfRange {
                        index: tex_index,
                        count: texcoord_count,
                    });
                }
                data.tex_coords.push([
                    mesh.texcoords[tex_index * 2],
                    mesh.texcoords[tex_index * 2 + 1],
                ]);
            }
        }

        debug!(
            "expanded OBJ model `{}`: {} triangles",
            model.name,
            mesh.indices.len() / 3
        );
    }

    if !all_textured {
        data.tex_coords.clear();
    }

    if data.vertices.is_empty() {
        return Err(GeometryError::EmptyModel(PathBuf::from(path)));
    }

    Ok(data)
}

fn lookup(indices: &[u32], corner: usize) -> Result<usize, GeometryError> {
    indices
        .get(corner)
        .map(|&index| index as usize)
        .ok_or(GeometryError::IndexOutOfRange {
            index: corner,
            count: indices.len(),
        })
}

fn vec3_at(values: &[f32], index: usize, count: usize) -> Result<[f32; 3], GeometryError> {
    if index >= count {
        return Err(GeometryError::IndexOutOfRange { index, count });
    }
    Ok([values[index * 3], values[index * 3 + 1], values[index * 3 + 2]])
}
