//! Static walls around the arena

use glam::Vec2;

use crate::constants::{WALL_ELASTICITY, WALL_THICKNESS};
use crate::particle::Particle;

/// A thick line segment that balls bounce off.
///
/// A wall is one-sided: `normal` points into the arena, and a ball is held
/// on that side of the wall's line whether it touches it, sits on it or has
/// already crossed it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    /// Unit normal pointing to the side balls live on
    pub normal: Vec2,
    /// Half-thickness: contact happens at `ball radius + thickness`
    pub thickness: f32,
    /// Coefficient of restitution
    pub elasticity: f32,
}

impl Segment {
    /// Wall whose inner side is to the left of `start → end`
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            normal: (end - start).perp().normalize_or_zero(),
            thickness: WALL_THICKNESS,
            elasticity: WALL_ELASTICITY,
        }
    }

    /// Flip the normal if needed so it points towards `inside`
    pub fn facing(mut self, inside: Vec2) -> Self {
        if self.signed_distance(inside) < 0.0 {
            self.normal = -self.normal;
        }
        self
    }

    /// Distance from the wall's line along the inward normal; negative once crossed
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        (point - self.start).dot(self.normal)
    }

    /// Push a ball back to contact distance on the inner side and reflect
    /// its approach velocity.
    ///
    /// Returns whether the ball was in contact.
    pub fn resolve(&self, particle: &mut Particle) -> bool {
        let contact = particle.radius() + self.thickness;
        let depth = contact - self.signed_distance(particle.position);
        if depth <= 0.0 || !depth.is_finite() {
            return false;
        }

        particle.position += self.normal * depth;

        let approach = particle.velocity.dot(self.normal);
        if approach < 0.0 {
            particle.velocity -= self.normal * ((1.0 + self.elasticity) * approach);
        }
        true
    }
}

/// The four walls of a `width × height` arena with its corner at the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub walls: [Segment; 4],
}

impl Boundary {
    pub fn new(width: f32, height: f32) -> Self {
        let nw = Vec2::new(0.0, 0.0);
        let ne = Vec2::new(width, 0.0);
        let se = Vec2::new(width, height);
        let sw = Vec2::new(0.0, height);
        let centre = se * 0.5;
        Self {
            walls: [
                Segment::new(nw, ne).facing(centre), // north
                Segment::new(ne, se).facing(centre), // east
                Segment::new(sw, se).facing(centre), // south
                Segment::new(nw, sw).facing(centre), // west
            ],
        }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        for wall in &mut self.walls {
            wall.thickness = thickness;
        }
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        for wall in &mut self.walls {
            wall.elasticity = elasticity;
        }
        self
    }

    /// Resolve contacts against every wall; returns how many were touched
    pub fn contain(&self, particle: &mut Particle) -> usize {
        self.walls
            .iter()
            .filter(|wall| wall.resolve(particle))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_enclose_arena() {
        let boundary = Boundary::new(700.0, 500.0);
        let [north, east, south, west] = boundary.walls;

        assert_eq!((north.start, north.end), (Vec2::ZERO, Vec2::new(700.0, 0.0)));
        assert_eq!((east.start, east.end), (Vec2::new(700.0, 0.0), Vec2::new(700.0, 500.0)));
        assert_eq!((south.start, south.end), (Vec2::new(0.0, 500.0), Vec2::new(700.0, 500.0)));
        assert_eq!((west.start, west.end), (Vec2::ZERO, Vec2::new(0.0, 500.0)));
        assert!(boundary.walls.iter().all(|w| w.thickness == 1.0 && w.elasticity == 1.0));
    }

    #[test]
    fn test_normals_point_inwards() {
        let [north, east, south, west] = Boundary::new(700.0, 500.0).walls;
        assert_eq!(north.normal, Vec2::Y);
        assert_eq!(east.normal, Vec2::NEG_X);
        assert_eq!(south.normal, Vec2::NEG_Y);
        assert_eq!(west.normal, Vec2::X);
    }

    #[test]
    fn test_facing_flips_normal() {
        let wall = Segment::new(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(wall.normal, Vec2::Y);
        let flipped = wall.facing(Vec2::new(5.0, -3.0));
        assert_eq!(flipped.normal, Vec2::NEG_Y);
        assert_eq!(flipped.signed_distance(Vec2::new(5.0, -3.0)), 3.0);
    }

    #[test]
    fn test_centre_on_wall_line_is_pushed_inside() {
        let boundary = Boundary::new(700.0, 700.0);
        let mut ball = Particle::new(Vec2::new(0.0, 350.0));
        ball.velocity = Vec2::new(-25.0, 0.0);

        assert_eq!(boundary.contain(&mut ball), 1);
        assert_eq!(ball.position, Vec2::new(11.0, 350.0));
        assert_eq!(ball.velocity, Vec2::new(25.0, 0.0));
    }

    #[test]
    fn test_crossed_ball_is_pulled_back() {
        let boundary = Boundary::new(700.0, 700.0);
        let mut ball = Particle::new(Vec2::new(-5.0, 350.0));
        ball.velocity = Vec2::new(-40.0, 0.0);

        boundary.contain(&mut ball);

        assert_eq!(ball.position.x, 11.0);
        assert_eq!(ball.velocity, Vec2::new(40.0, 0.0));
    }

    #[test]
    fn test_ball_past_corner_is_held_by_both_walls() {
        let boundary = Boundary::new(700.0, 700.0);
        let mut ball = Particle::new(Vec2::new(705.0, 710.0));

        assert_eq!(boundary.contain(&mut ball), 2);
        assert_eq!(ball.position, Vec2::new(689.0, 689.0));
    }

    #[test]
    fn test_elastic_rebound_keeps_speed() {
        let boundary = Boundary::new(700.0, 700.0);
        let mut ball = Particle::new(Vec2::new(350.0, 695.0));
        ball.velocity = Vec2::new(30.0, 40.0);

        let touched = boundary.contain(&mut ball);

        assert_eq!(touched, 1);
        assert_eq!(ball.velocity, Vec2::new(30.0, -40.0));
        assert_eq!(ball.position.y, 700.0 - 11.0);
    }

    #[test]
    fn test_receding_ball_keeps_velocity() {
        let boundary = Boundary::new(700.0, 700.0);
        let mut ball = Particle::new(Vec2::new(5.0, 350.0));
        ball.velocity = Vec2::new(10.0, 0.0);

        boundary.contain(&mut ball);

        assert_eq!(ball.velocity, Vec2::new(10.0, 0.0));
        assert_eq!(ball.position.x, 11.0);
    }

    #[test]
    fn test_free_ball_untouched() {
        let boundary = Boundary::new(700.0, 700.0);
        let mut ball = Particle::new(Vec2::new(350.0, 350.0));
        ball.velocity = Vec2::new(-3.0, 7.0);
        let before = ball;

        assert_eq!(boundary.contain(&mut ball), 0);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_inelastic_wall_absorbs() {
        let boundary = Boundary::new(700.0, 700.0).with_elasticity(0.0);
        let mut ball = Particle::new(Vec2::new(350.0, 5.0));
        ball.velocity = Vec2::new(0.0, -20.0);

        boundary.contain(&mut ball);

        assert_eq!(ball.velocity, Vec2::ZERO);
    }
}
