//! Wavefront OBJ loading.
//!
//! Reads `v`, `vt`, `vn` and `f` statements; everything else (groups,
//! materials, smoothing) is skipped. Polygons are fan triangulated and all
//! indices are converted to 0-based on the way in.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::point2d::Point2D;
use crate::point3d::Point3D;

/// One triangle as indices into the model's attribute lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub v_indices: [usize; 3],
    pub vt_indices: Option<[usize; 3]>,
    pub vn_indices: Option<[usize; 3]>,
}

/// Resolved object-space data of one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertices {
    pub positions: [Point3D; 3],
    pub tex_coords: Option<[Point2D; 3]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub positions: Vec<Point3D>,
    pub texcoords: Vec<Point2D>,
    pub normals: Vec<Point3D>,
    pub faces: Vec<Face>,
}

struct FaceVertex {
    v: usize,
    vt: Option<usize>,
    vn: Option<usize>,
}

impl Model {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let model = Self::parse(BufReader::new(file), path)?;
        log::info!(
            "Loaded {}: {} vertices, {} texture coords, {} triangles",
            path.display(),
            model.positions.len(),
            model.texcoords.len(),
            model.faces.len()
        );
        Ok(model)
    }

    /// Parses OBJ text; `path` only labels errors.
    pub fn parse<R: BufRead>(reader: R, path: &Path) -> Result<Self> {
        let mut model = Model::default();
        let fail = |line: usize, message: String| Error::Parse {
            path: PathBuf::from(path),
            line,
            message,
        };

        for (index, line) in reader.lines().enumerate() {
            let line_num = index + 1;
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() || tokens[0].starts_with('#') {
                continue;
            }

            match tokens[0] {
                "v" => {
                    let [x, y, z] = parse_floats::<3>(&tokens[1..]).map_err(|m| fail(line_num, m))?;
                    model.positions.push(Point3D { x, y, z })
                }
                "vt" => {
                    let [u, v] = parse_floats::<2>(&tokens[1..]).map_err(|m| fail(line_num, m))?;
                    model.texcoords.push(Point2D { x: u, y: v })
                }
                "vn" => {
                    let [x, y, z] = parse_floats::<3>(&tokens[1..]).map_err(|m| fail(line_num, m))?;
                    model.normals.push(Point3D { x, y, z })
                }
                "f" => {
                    let mut corners = Vec::with_capacity(tokens.len() - 1);
                    for part in &tokens[1..] {
                        let corner = parse_face_vertex(part).map_err(|m| fail(line_num, m))?;
                        corners.push(model.resolve(corner, line_num)?);
                    }
                    if corners.len() < 3 {
                        log::warn!("{}: line {}: skipping face with {} vertices", path.display(), line_num, corners.len());
                        continue;
                    }
                    model.fan_triangulate(&corners);
                }
                _ => {}
            }
        }

        Ok(model)
    }

    /// Turns signed 1-based OBJ indices into checked 0-based ones.
    fn resolve(&self, corner: (isize, Option<isize>, Option<isize>), line: usize) -> Result<FaceVertex> {
        let (v, vt, vn) = corner;
        Ok(FaceVertex {
            v: resolve_index(v, self.positions.len(), "vertex", line)?,
            vt: vt.map(|i| resolve_index(i, self.texcoords.len(), "texture", line)).transpose()?,
            vn: vn.map(|i| resolve_index(i, self.normals.len(), "normal", line)).transpose()?,
        })
    }

    fn fan_triangulate(&mut self, corners: &[FaceVertex]) {
        for i in 1..corners.len() - 1 {
            let (a, b, c) = (&corners[0], &corners[i], &corners[i + 1]);
            let vt_indices = match (a.vt, b.vt, c.vt) {
                (Some(ta), Some(tb), Some(tc)) => Some([ta, tb, tc]),
                _ => None,
            };
            let vn_indices = match (a.vn, b.vn, c.vn) {
                (Some(na), Some(nb), Some(nc)) => Some([na, nb, nc]),
                _ => None,
            };
            self.faces.push(Face { v_indices: [a.v, b.v, c.v], vt_indices, vn_indices });
        }
    }

    pub fn face_vertices(&self, face: &Face) -> FaceVertices {
        FaceVertices {
            positions: face.v_indices.map(|i| self.positions[i]),
            tex_coords: face.vt_indices.map(|idx| idx.map(|i| self.texcoords[i])),
        }
    }

    pub fn triangles(&self) -> impl Iterator<Item = FaceVertices> + '_ {
        self.faces.iter().map(|face| self.face_vertices(face))
    }

    /// Recenters and uniformly scales positions into `[-1, 1]` unless they
    /// already fit.
    pub fn normalize(&mut self) {
        let Some(first) = self.positions.first().copied() else {
            return;
        };
        let (mut min, mut max) = (first, first);
        for p in &self.positions {
            min = Point3D::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3D::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        let fits = [min.x, min.y, min.z, max.x, max.y, max.z]
            .iter()
            .all(|c| (-1.0..=1.0).contains(c));
        if fits {
            return;
        }

        let center = (min + max) / 2.0;
        let half = (max - min) / 2.0;
        let extent = half.x.max(half.y).max(half.z);
        if extent == 0.0 {
            return;
        }
        log::debug!("Normalizing mesh: center {:?}, half extent {}", center, extent);
        for p in &mut self.positions {
            *p = (*p - center) / extent;
        }
    }
}

fn parse_floats<const N: usize>(tokens: &[&str]) -> std::result::Result<[f64; N], String> {
    let mut out = [0.0; N];
    if tokens.len() < N {
        return Err(format!("expected {} numbers, found {}", N, tokens.len()));
    }
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|e| format!("invalid number {:?}: {}", token, e))?;
    }
    Ok(out)
}

fn parse_face_vertex(s: &str) -> std::result::Result<(isize, Option<isize>, Option<isize>), String> {
    let parse = |part: &str| {
        part.parse::<isize>()
            .map_err(|e| format!("invalid face index {:?}: {}", s, e))
    };
    let mut parts = s.split('/');
    let v = match parts.next() {
        Some(p) if !p.is_empty() => parse(p)?,
        _ => return Err(format!("missing vertex index in {:?}", s)),
    };
    let vt = match parts.next() {
        Some("") | None => None,
        Some(p) => Some(parse(p)?),
    };
    let vn = match parts.next() {
        Some("") | None => None,
        Some(p) => Some(parse(p)?),
    };
    Ok((v, vt, vn))
}

fn resolve_index(index: isize, len: usize, kind: &'static str, line: usize) -> Result<usize> {
    let resolved = if index > 0 {
        Some(index as usize - 1)
    } else if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        None
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(Error::IndexOutOfRange {
            line,
            kind,
            index: index.unsigned_abs(),
            len,
        }),
    }
}
