//! OBJ mesh parsing into flat per-vertex attribute streams.
//!
//! The parser consumes the `v`/`vt`/`vn`/`f` subset of the OBJ text format
//! and emits three parallel float streams (positions, texcoords, normals)
//! in face-emission order. The output is deliberately denormalized: a
//! vertex referenced by two faces is emitted twice, so the streams can be
//! uploaded as-is and drawn without an index buffer. Polygons with more
//! than three corners are fan-triangulated around their first corner.
//!
//! Anything the parser cannot make sense of is a per-line condition:
//! unknown directives and malformed lines are skipped, logged, and recorded
//! as [`ObjWarning`]s on the result so callers can inspect them. Only a
//! mesh that ends up with zero vertex positions is rejected outright.

use std::fmt;

use log::warn;

use crate::error::Error;

/// Flat per-vertex attribute streams produced by [`parse_obj`].
///
/// Strides: positions 3, texcoords 2, normals 3. Texcoord and normal
/// entries are only emitted for face corners that reference them, so their
/// streams are either empty or run parallel to `position`.
#[derive(Clone, Debug, Default)]
pub struct ObjMesh {
    pub position: Vec<f32>,
    pub texcoord: Vec<f32>,
    pub normal: Vec<f32>,
    /// Non-fatal diagnostics collected while parsing, in source order.
    pub warnings: Vec<ObjWarning>,
}

impl ObjMesh {
    /// Number of emitted vertices (also the draw count for `TRIANGLES`).
    pub fn vertex_count(&self) -> usize {
        self.position.len() / 3
    }
}

/// A recoverable, per-line parse diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjWarning {
    /// A directive outside the supported `v`/`vt`/`vn`/`f` subset
    /// (materials, groups, smoothing groups, ...). The line is skipped.
    UnhandledKeyword { line: usize, keyword: String },
    /// A supported directive whose arguments could not be parsed or whose
    /// face references could not be resolved. The whole line is skipped so
    /// no partial triangle is ever emitted.
    MalformedLine { line: usize, reason: String },
}

impl fmt::Display for ObjWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjWarning::UnhandledKeyword { line, keyword } => {
                write!(f, "line {line}: unhandled keyword `{keyword}`")
            }
            ObjWarning::MalformedLine { line, reason } => {
                write!(f, "line {line}: skipped malformed line ({reason})")
            }
        }
    }
}

/// One face corner with its resolved attribute values.
struct Corner {
    position: [f32; 3],
    texcoord: Option<[f32; 2]>,
    normal: Option<[f32; 3]>,
}

/// Parse OBJ text into flat attribute streams.
///
/// Returns [`Error::EmptyGeometry`] when the text yields no vertex
/// positions at all (e.g. only comments, or every face line malformed), so
/// callers reject the mesh before handing it to a renderer.
pub fn parse_obj(text: &str) -> Result<ObjMesh, Error> {
    // Attribute pools are seeded with one placeholder entry so that real
    // entries start at index 1, matching the format's 1-based references.
    let mut positions: Vec<[f32; 3]> = vec![[0.0; 3]];
    let mut texcoords: Vec<[f32; 2]> = vec![[0.0; 2]];
    let mut normals: Vec<[f32; 3]> = vec![[0.0; 3]];

    let mut mesh = ObjMesh::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        let outcome = match keyword {
            "v" => parse_floats::<3>(&args).map(|entry| positions.push(entry)),
            "vt" => parse_floats::<2>(&args).map(|entry| texcoords.push(entry)),
            "vn" => parse_floats::<3>(&args).map(|entry| normals.push(entry)),
            "f" => emit_face(&args, &positions, &texcoords, &normals, &mut mesh),
            _ => {
                let warning = ObjWarning::UnhandledKeyword {
                    line: line_no,
                    keyword: keyword.to_string(),
                };
                warn!("{warning}");
                mesh.warnings.push(warning);
                continue;
            }
        };

        if let Err(reason) = outcome {
            let warning = ObjWarning::MalformedLine { line: line_no, reason };
            warn!("{warning}");
            mesh.warnings.push(warning);
        }
    }

    if mesh.position.is_empty() {
        return Err(Error::EmptyGeometry);
    }
    Ok(mesh)
}

/// Parse the first `N` arguments as floats. Extra arguments (e.g. the `w`
/// component of `v x y z w`) are ignored; too few or non-numeric ones fail
/// the line.
fn parse_floats<const N: usize>(args: &[&str]) -> Result<[f32; N], String> {
    if args.len() < N {
        return Err(format!("expected {N} numeric arguments, got {}", args.len()));
    }
    let mut out = [0.0f32; N];
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = token
            .parse()
            .map_err(|_| format!("invalid float `{token}`"))?;
    }
    Ok(out)
}

/// Fan-triangulate one `f` line and append the resolved attribute tuples.
///
/// All corner references are resolved before anything is emitted, so a bad
/// reference skips the whole line instead of leaving a partial triangle in
/// the output streams.
fn emit_face(
    args: &[&str],
    positions: &[[f32; 3]],
    texcoords: &[[f32; 2]],
    normals: &[[f32; 3]],
    mesh: &mut ObjMesh,
) -> Result<(), String> {
    if args.len() < 3 {
        return Err(format!("face needs at least 3 corners, got {}", args.len()));
    }

    let corners = args
        .iter()
        .map(|token| resolve_corner(token, positions, texcoords, normals))
        .collect::<Result<Vec<_>, _>>()?;

    // Triangle t uses corners [0, t + 1, t + 2]: every triangle shares the
    // first corner of the polygon.
    for t in 0..corners.len() - 2 {
        for corner in [&corners[0], &corners[t + 1], &corners[t + 2]] {
            mesh.position.extend_from_slice(&corner.position);
            if let Some(texcoord) = corner.texcoord {
                mesh.texcoord.extend_from_slice(&texcoord);
            }
            if let Some(normal) = corner.normal {
                mesh.normal.extend_from_slice(&normal);
            }
        }
    }
    Ok(())
}

/// Resolve one `p[/t][/n]` face token against the attribute pools.
fn resolve_corner(
    token: &str,
    positions: &[[f32; 3]],
    texcoords: &[[f32; 2]],
    normals: &[[f32; 3]],
) -> Result<Corner, String> {
    let mut parts = token.splitn(3, '/');
    // split always yields a first part; an empty one fails index parsing below
    let position_part = parts.next().unwrap_or("");
    let texcoord_part = parts.next().filter(|part| !part.is_empty());
    let normal_part = parts.next().filter(|part| !part.is_empty());

    let position = positions[resolve_index(position_part, positions.len())?];
    let texcoord = texcoord_part
        .map(|part| resolve_index(part, texcoords.len()).map(|i| texcoords[i]))
        .transpose()?;
    let normal = normal_part
        .map(|part| resolve_index(part, normals.len()).map(|i| normals[i]))
        .transpose()?;

    Ok(Corner { position, texcoord, normal })
}

/// Resolve a 1-based or negative-relative reference to a pool index.
///
/// Positive `i` addresses pool slot `i` directly (the placeholder at slot 0
/// absorbs the 1-based convention); non-positive `i` counts back from the
/// most recently appended entry as `pool_len + i`.
fn resolve_index(part: &str, pool_len: usize) -> Result<usize, String> {
    let reference: i64 = part
        .parse()
        .map_err(|_| format!("invalid index `{part}`"))?;
    let index = if reference > 0 {
        reference
    } else {
        pool_len as i64 + reference
    };
    if index < 1 || index >= pool_len as i64 {
        return Err(format!("index `{part}` out of range for pool of {}", pool_len - 1));
    }
    Ok(index as usize)
}
