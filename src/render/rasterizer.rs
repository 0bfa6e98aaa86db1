use glam::{Mat4, Vec3, Vec4Swizzles};

use crate::math::{hex_to_rgb, shade};
use crate::scene::DrawItem;

use super::canvas::Canvas;

const AMBIENT: f32 = 0.35;
const WIREFRAME_DEPTH_BIAS: f32 = 1e-4;
/// Clip-space w below which a vertex counts as behind the camera
const NEAR_W: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Shaded,
    Wireframe,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Shaded => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::Shaded,
        }
    }
}

/// Flat-shaded software rasteriser for the scene's draw list
#[derive(Debug, Clone)]
pub struct Rasterizer {
    pub mode: RenderMode,
    pub background: [u8; 4],
    /// Direction towards the light, world space
    pub light_dir: Vec3,
}

impl Rasterizer {
    pub fn new(background: u32, mode: RenderMode) -> Self {
        Self {
            mode,
            background: shade(hex_to_rgb(background), 1.0),
            light_dir: Vec3::new(0.4, 1.0, 0.6).normalize(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas, items: &[DrawItem<'_>], view_projection: Mat4) {
        canvas.clear(self.background);
        let (width, height) = canvas.dimensions();
        let viewport = Viewport {
            width: width as f32,
            height: height as f32,
        };

        for item in items {
            self.draw_item(canvas, item, view_projection, viewport);
        }
    }

    fn draw_item(&self, canvas: &mut Canvas, item: &DrawItem<'_>, view_projection: Mat4, viewport: Viewport) {
        let mesh = item.mesh;
        let world: Vec<Vec3> = mesh
            .positions
            .iter()
            .map(|p| item.transform.transform_point3(*p))
            .collect();
        let screen: Vec<Option<Vec3>> = world
            .iter()
            .map(|p| viewport.project(view_projection, *p))
            .collect();

        for &[a, b, c] in &mesh.triangles {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let (Some(sa), Some(sb), Some(sc)) = (screen[a], screen[b], screen[c]) else {
                continue;
            };

            match self.mode {
                RenderMode::Shaded => {
                    // Screen y points down, so front faces wind clockwise here
                    let facing = (sb - sa).truncate().perp_dot((sc - sa).truncate());
                    if facing >= 0.0 {
                        continue;
                    }

                    let normal = (world[b] - world[a])
                        .cross(world[c] - world[a])
                        .normalize_or_zero();
                    let lambert = normal.dot(self.light_dir).max(0.0);
                    let intensity = AMBIENT + (1.0 - AMBIENT) * lambert;
                    canvas.fill_triangle([sa, sb, sc], shade(item.color, intensity));
                }
                RenderMode::Wireframe => {
                    let color = shade(item.color, 1.0);
                    let bias = Vec3::new(0.0, 0.0, WIREFRAME_DEPTH_BIAS);
                    canvas.draw_line(sa - bias, sb - bias, color);
                    canvas.draw_line(sb - bias, sc - bias, color);
                    canvas.draw_line(sc - bias, sa - bias, color);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// World point to (pixel x, pixel y, depth); None when behind the camera
    fn project(&self, view_projection: Mat4, point: Vec3) -> Option<Vec3> {
        let clip = view_projection * point.extend(1.0);
        if clip.w < NEAR_W {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        Some(Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
            ndc.z,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives;

    fn view_projection() -> Mat4 {
        Mat4::perspective_rh(60f32.to_radians(), 1.0, 0.1, 100.0)
            * Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(RenderMode::Shaded.toggled(), RenderMode::Wireframe);
        assert_eq!(RenderMode::Wireframe.toggled(), RenderMode::Shaded);
    }

    #[test]
    fn empty_scene_is_all_sky() {
        let rasterizer = Rasterizer::new(0x6eddff, RenderMode::Shaded);
        let mut canvas = Canvas::new(16, 16);
        rasterizer.render(&mut canvas, &[], view_projection());
        assert_eq!(canvas.pixel(8, 8), Some([0x6e, 0xdd, 0xff, 255]));
    }

    #[test]
    fn solid_in_front_of_camera_covers_the_centre() {
        let mesh = primitives::cuboid(Vec3::splat(1.0));
        let item = DrawItem {
            mesh: &mesh,
            transform: Mat4::IDENTITY,
            color: [1.0, 0.0, 0.0],
        };
        let rasterizer = Rasterizer::new(0x000000, RenderMode::Shaded);
        let mut canvas = Canvas::new(32, 32);
        rasterizer.render(&mut canvas, &[item], view_projection());

        let centre = canvas.pixel(16, 16).unwrap();
        assert!(centre[0] > 0, "{centre:?}");
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn solid_behind_camera_is_skipped() {
        let mesh = primitives::cuboid(Vec3::splat(1.0));
        let item = DrawItem {
            mesh: &mesh,
            transform: Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0)),
            color: [1.0, 0.0, 0.0],
        };
        let rasterizer = Rasterizer::new(0x000000, RenderMode::Wireframe);
        let mut canvas = Canvas::new(32, 32);
        rasterizer.render(&mut canvas, &[item], view_projection());
        assert!(canvas.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }
}
