//! Pure pointer model behind the custom cursor: hover/press bookkeeping and
//! the magnetic pull toward tagged elements.

use crate::motion::Vec2;

/// Distance inside which a magnetic element starts attracting the cursor.
pub const ATTRACT_RADIUS: f64 = 100.0;

/// Fraction of the remaining gap the virtual cursor moves toward a magnetic
/// center at full pull.
pub const ATTRACT_STRENGTH: f64 = 0.4;

/// Cursor scale while over an interactive element.
pub const HOVER_SCALE: f64 = 1.5;

/// Selector marking elements that change cursor state on hover. Magnetic
/// elements are implicitly hoverable; hoverable elements get no attraction.
pub const HOVERABLE_SELECTOR: &str = "a, button, [data-hoverable], [data-magnetic]";

/// Selector for elements that pull the virtual cursor toward their center.
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerInput {
    /// Pointer moved; carries whether it is over a hoverable element.
    Move { over_interactive: bool },
    Down,
    Up,
    /// Pointer left the document.
    Leave,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerPhase {
    Idle,
    Hovering,
    Pressed,
}

/// Transient cursor state, owned by the cursor controller alone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CursorState {
    pub hovering: bool,
    pub pressed: bool,
}

impl CursorState {
    pub fn apply(&mut self, input: PointerInput) {
        match input {
            PointerInput::Move { over_interactive } => self.hovering = over_interactive,
            PointerInput::Down => self.pressed = true,
            // A release observed anywhere clears the press, so a button-up
            // off-target can never leave the cursor stuck pressed.
            PointerInput::Up => self.pressed = false,
            // Leaving the viewport resets hover; press waits for the release.
            PointerInput::Leave => self.hovering = false,
        }
    }

    pub fn phase(self) -> PointerPhase {
        if self.pressed {
            PointerPhase::Pressed
        } else if self.hovering {
            PointerPhase::Hovering
        } else {
            PointerPhase::Idle
        }
    }

    pub fn scale(self) -> f64 {
        if self.hovering {
            HOVER_SCALE
        } else {
            1.0
        }
    }
}

/// Blend the raw pointer toward the nearest magnetic center in range.
///
/// Pull falls off linearly from 1 at the center to 0 at `radius`; the
/// result moves `pull * strength` of the way toward that center. When
/// several centers are in range the nearest one wins, which keeps the
/// outcome independent of document order. An empty candidate set returns
/// the pointer untouched.
pub fn magnetic_target(pointer: Vec2, centers: &[Vec2], radius: f64, strength: f64) -> Vec2 {
    let mut nearest: Option<(f64, Vec2)> = None;
    for &center in centers {
        let distance = pointer.distance(center);
        if distance >= radius {
            continue;
        }
        if nearest.map_or(true, |(best, _)| distance < best) {
            nearest = Some((distance, center));
        }
    }

    let Some((distance, center)) = nearest else {
        return pointer;
    };

    let pull = 1.0 - distance / radius;
    pointer + (center - pointer) * (pull * strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_toggles_exactly_once() {
        let mut state = CursorState::default();
        state.apply(PointerInput::Down);
        assert!(state.pressed);
        state.apply(PointerInput::Up);
        assert!(!state.pressed);
        // A stray duplicate release stays released.
        state.apply(PointerInput::Up);
        assert!(!state.pressed);
    }

    #[test]
    fn release_off_target_still_clears_press() {
        let mut state = CursorState::default();
        state.apply(PointerInput::Move { over_interactive: true });
        state.apply(PointerInput::Down);
        state.apply(PointerInput::Leave);
        assert!(state.pressed, "leave alone must not clear the press");
        state.apply(PointerInput::Up);
        assert_eq!(state.phase(), PointerPhase::Idle);
    }

    #[test]
    fn pressed_returns_to_applicable_hover_phase() {
        let mut state = CursorState::default();
        state.apply(PointerInput::Move { over_interactive: true });
        state.apply(PointerInput::Down);
        assert_eq!(state.phase(), PointerPhase::Pressed);
        state.apply(PointerInput::Up);
        assert_eq!(state.phase(), PointerPhase::Hovering);

        state.apply(PointerInput::Move { over_interactive: false });
        state.apply(PointerInput::Down);
        state.apply(PointerInput::Up);
        assert_eq!(state.phase(), PointerPhase::Idle);
    }

    #[test]
    fn leave_resets_hover() {
        let mut state = CursorState::default();
        state.apply(PointerInput::Move { over_interactive: true });
        assert_eq!(state.scale(), HOVER_SCALE);
        state.apply(PointerInput::Leave);
        assert_eq!(state.phase(), PointerPhase::Idle);
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn worked_attraction_example() {
        // Pointer (500,500), one center (520,505): d ~= 20.6, pull ~= 0.79,
        // virtual target ~= (506.3, 501.6).
        let target = magnetic_target(
            Vec2::new(500.0, 500.0),
            &[Vec2::new(520.0, 505.0)],
            ATTRACT_RADIUS,
            ATTRACT_STRENGTH,
        );
        assert!((target.x - 506.3).abs() < 0.1, "x = {}", target.x);
        assert!((target.y - 501.6).abs() < 0.1, "y = {}", target.y);
    }

    #[test]
    fn empty_candidate_set_is_a_no_op() {
        let pointer = Vec2::new(13.0, 37.0);
        assert_eq!(
            magnetic_target(pointer, &[], ATTRACT_RADIUS, ATTRACT_STRENGTH),
            pointer
        );
    }

    #[test]
    fn out_of_range_center_is_ignored() {
        let pointer = Vec2::new(0.0, 0.0);
        let far = Vec2::new(ATTRACT_RADIUS + 1.0, 0.0);
        assert_eq!(
            magnetic_target(pointer, &[far], ATTRACT_RADIUS, ATTRACT_STRENGTH),
            pointer
        );
    }

    #[test]
    fn nearest_center_wins_the_tie_break() {
        let pointer = Vec2::new(0.0, 0.0);
        let near = Vec2::new(10.0, 0.0);
        let farther = Vec2::new(-40.0, 0.0);
        // Same result regardless of candidate order.
        let a = magnetic_target(pointer, &[farther, near], ATTRACT_RADIUS, ATTRACT_STRENGTH);
        let b = magnetic_target(pointer, &[near, farther], ATTRACT_RADIUS, ATTRACT_STRENGTH);
        assert_eq!(a, b);
        assert!(a.x > 0.0, "pull must go toward the nearest center");
    }

    #[test]
    fn target_stays_between_pointer_and_nearest_center() {
        let pointer = Vec2::new(500.0, 500.0);
        let centers = [
            Vec2::new(530.0, 520.0),
            Vec2::new(450.0, 505.0),
            Vec2::new(1000.0, 1000.0),
        ];
        let target = magnetic_target(pointer, &centers, ATTRACT_RADIUS, ATTRACT_STRENGTH);
        let nearest = Vec2::new(530.0, 520.0);
        for (t, lo, hi) in [
            (target.x, pointer.x.min(nearest.x), pointer.x.max(nearest.x)),
            (target.y, pointer.y.min(nearest.y), pointer.y.max(nearest.y)),
        ] {
            assert!(t >= lo && t <= hi, "{t} escapes [{lo}, {hi}]");
        }
    }
}
