use glam::{Quat, Vec2, Vec3};

use crate::camera::core::{Camera, CameraUniform, Ray};
use crate::options::CameraOptions;

/// Radians of orbit per pixel of drag at unit rotate speed.
const ROTATE_PER_PIXEL: f32 = 0.01;
/// Scene units of pan per pixel of drag at unit pan speed and distance 10.
const PAN_PER_PIXEL: f32 = 0.02;
/// Closest approach when the orbit distance is unbounded.
const FREE_MIN_DISTANCE: f32 = 0.1;

/// Orbit distance bounds from options: positive, finite and ordered.
/// Invalid limits fall back to the defaults.
fn distance_range(opts: &CameraOptions) -> (f32, f32) {
    let defaults = CameraOptions::default();
    let valid = |d: f32| d.is_finite() && d > 0.0;
    let min = if valid(opts.min_distance) {
        opts.min_distance
    } else {
        defaults.min_distance
    };
    let max = if valid(opts.max_distance) {
        opts.max_distance
    } else {
        defaults.max_distance
    };
    (min.min(max), min.max(max))
}

/// Orbit camera around a focus point, clamped to a distance range, with a
/// home pose that [`reset`](Self::reset) returns to.
#[derive(Debug, Clone)]
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    home_distance: f32,

    /// Camera derived from the orbit state.
    pub camera: Camera,
    /// Uniform mirror of `camera`.
    pub uniform: CameraUniform,

    min_distance: f32,
    max_distance: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl CameraController {
    /// Camera looking down -Z at the origin from `home_distance`.
    #[must_use]
    pub fn new(opts: &CameraOptions, home_distance: f32) -> Self {
        let (min_distance, max_distance) = distance_range(opts);
        let home_distance = if home_distance.is_finite() {
            home_distance.clamp(min_distance, max_distance)
        } else {
            min_distance
        };
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, home_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        };
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            orientation: Quat::IDENTITY,
            distance: home_distance,
            focus_point: Vec3::ZERO,
            home_distance,
            camera,
            uniform,
            min_distance,
            max_distance,
            rotate_speed: opts.rotate_speed,
            pan_speed: opts.pan_speed,
            zoom_speed: opts.zoom_speed,
        }
    }

    /// Drop the orbit distance limits: zoom may then range from just in
    /// front of the focus point out to the far plane.
    #[must_use]
    pub fn without_distance_limits(mut self) -> Self {
        self.min_distance = FREE_MIN_DISTANCE;
        self.max_distance = self.camera.zfar.max(FREE_MIN_DISTANCE);
        self
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Current eye-to-focus distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current focus point.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Orbit by a pixel drag delta.
    pub fn rotate(&mut self, delta: Vec2) {
        let speed = self.rotate_speed * ROTATE_PER_PIXEL;

        // Yaw around the camera's up, then pitch around its new right.
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * speed);
        self.orientation = horizontal * self.orientation;

        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * speed);
        self.orientation = (vertical * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Slide the focus point by a pixel drag delta. Pan distance scales
    /// with the current orbit distance.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let speed = self.pan_speed * PAN_PER_PIXEL * self.distance / 10.0;

        self.focus_point += right * (-delta.x * speed) + up * (delta.y * speed);
        self.update_camera_pos();
    }

    /// Dolly in (positive) or out (negative), clamped to the distance
    /// range.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Return to the home pose.
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.distance = self.home_distance;
        self.focus_point = Vec3::ZERO;
        self.update_camera_pos();
    }

    /// Whether the camera sits at its home pose.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.focus_point == Vec3::ZERO
            && self.distance == self.home_distance
            && self.orientation.abs_diff_eq(Quat::IDENTITY, 1e-6)
    }

    /// Pick ray through a pixel of a `viewport`-sized surface.
    #[must_use]
    pub fn screen_ray(&self, pixel: Vec2, viewport: Vec2) -> Ray {
        self.camera.screen_ray(pixel, viewport)
    }
}
