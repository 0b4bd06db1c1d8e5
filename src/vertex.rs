//! Flat vertex data for uploading a frame to the GPU.
//!
//! Dots become one [`DotVertex`] each (instanced quads). Link segments become
//! two [`LineVertex`] each, for a line-list topology. Both are `Pod`, so a
//! vertex slice can be cast straight to bytes.
//!
//! The simulation runs in `f64`; this is the only place values are narrowed
//! to `f32`.

use crate::frame::RenderPayload;
use bytemuck::{Pod, Zeroable};

/// Position of a dot.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DotVertex {
    pub position: [f32; 2],
}

/// One end of a link segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub opacity: f32,
}

impl RenderPayload {
    pub fn dot_vertices(&self) -> Vec<DotVertex> {
        self.dots
            .iter()
            .map(|dot| DotVertex {
                position: dot.as_vec2().to_array(),
            })
            .collect()
    }

    /// Two vertices per segment, start then end.
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        self.segments
            .iter()
            .flat_map(|s| {
                [s.segment.start, s.segment.end].map(|p| LineVertex {
                    position: p.as_vec2().to_array(),
                    opacity: s.opacity as f32,
                })
            })
            .collect()
    }
}

/// View a vertex slice as raw bytes for a buffer upload.
pub fn as_bytes<T: Pod>(vertices: &[T]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkSegment;
    use crate::torus::Segment;
    use glam::DVec2;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<DotVertex>(), 8);
        assert_eq!(std::mem::size_of::<LineVertex>(), 12);
    }

    #[test]
    fn test_line_vertices() {
        let payload = RenderPayload {
            dots: vec![DVec2::new(1.0, 2.0)],
            segments: vec![LinkSegment {
                link: 0,
                segment: Segment::new(DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)),
                opacity: 0.5,
                split: false,
            }],
            ..Default::default()
        };

        let lines = payload.line_vertices();
        assert_eq!(
            lines,
            vec![
                LineVertex {
                    position: [1.0, 2.0],
                    opacity: 0.5
                },
                LineVertex {
                    position: [3.0, 4.0],
                    opacity: 0.5
                },
            ]
        );
        assert_eq!(as_bytes(&lines).len(), 24);
        assert_eq!(payload.dot_vertices()[0].position, [1.0, 2.0]);
    }
}
