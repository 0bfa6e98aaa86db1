use glam::{Mat4, Vec3};

use crate::core::{Button, Controller};

pub const CAMERA_SPEED: f32 = 0.1;
pub const CAMERA_ROTATION_SPEED: f32 = 0.05;
pub const FOV_Y_DEGREES: f32 = 60.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 200.0;

#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl MovementState {
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
            up: controller.is_down(Button::Space),
            down: controller.is_down(Button::Shift),
            rotate_left: controller.is_down(Button::KeyQ),
            rotate_right: controller.is_down(Button::KeyE),
        }
    }

    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.forward, self.backward),
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }

    const fn rotation_velocity(&self) -> f32 {
        self.to_direction(self.rotate_right, self.rotate_left)
    }
}

/// Free-flying camera looking down at the carousel
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement: MovementState,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 14.0, 24.0),
            yaw: std::f32::consts::PI,
            pitch: -0.45,
            movement: MovementState::default(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn update(&mut self, controller: &dyn Controller) {
        self.movement = MovementState::from_controller(controller);
        let (fwd, right_dir, up_dir) = self.movement.velocity();

        let displacement = self.forward() * fwd * CAMERA_SPEED
            + self.right() * right_dir * CAMERA_SPEED
            + Vec3::Y * up_dir * CAMERA_SPEED;

        self.position += displacement;
        self.yaw += self.movement.rotation_velocity() * CAMERA_ROTATION_SPEED;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);
        projection * self.view()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::tests::MockController;

    #[test]
    fn starts_looking_at_the_carousel() {
        let camera = Camera::new();
        let to_origin = (Vec3::ZERO - camera.position).normalize();
        assert!(camera.forward().dot(to_origin) > 0.95);
    }

    #[test]
    fn forward_key_moves_along_view() {
        let mut camera = Camera::new();
        let start = camera.position;
        let controller = MockController {
            pressed: vec![Button::KeyW],
        };
        camera.update(&controller);
        let moved = camera.position - start;
        assert!((moved.length() - CAMERA_SPEED).abs() < 1e-5);
        assert!(moved.normalize().dot(camera.forward()) > 0.999);
    }

    #[test]
    fn origin_projects_inside_the_frustum() {
        let camera = Camera::new();
        let clip = camera.view_projection(4.0 / 3.0) * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0);
    }
}
