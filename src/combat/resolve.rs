//! Stomp/damage classification for character-versus-enemy contacts.
//!
//! Pure logic, separated from the ECS so the tie-break policy for
//! simultaneous multi-enemy stomps is directly testable.

/// How far below an enemy's head line the descending character's feet may
/// be while still counting as a stomp.
pub const STOMP_TOLERANCE: f32 = 60.0;

/// Upward bounce applied once after a successful stomp.
pub const STOMP_BOUNCE_SPEED: f32 = 12.0;

/// One enemy currently overlapping the character.
#[derive(Debug, Clone, Copy)]
pub struct Contact<I> {
    pub id: I,
    /// The enemy's hitbox top edge in world space.
    pub head_line: f32,
}

/// Result of resolving all enemy contacts for one world tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome<I> {
    /// No overlapping enemies.
    None,
    /// Contact without a qualifying stomp: the character takes damage
    /// exactly once for the tick.
    Damage,
    /// At least one qualifying stomp: every qualifier dies in this tick
    /// and the character comes to rest on the highest killed head line.
    Stomp { killed: Vec<I>, rest_y: f32 },
}

/// Whether a single contact qualifies as a stomp.
pub fn is_stomp(falling: bool, char_feet: f32, enemy_head: f32) -> bool {
    falling && char_feet <= enemy_head + STOMP_TOLERANCE
}

/// Resolve all contacts of one tick with the group-stomp tie-break.
pub fn resolve_contacts<I: Copy>(
    falling: bool,
    char_feet: f32,
    char_height: f32,
    contacts: &[Contact<I>],
) -> ContactOutcome<I> {
    if contacts.is_empty() {
        return ContactOutcome::None;
    }

    let stomped: Vec<&Contact<I>> = contacts
        .iter()
        .filter(|c| is_stomp(falling, char_feet, c.head_line))
        .collect();

    if stomped.is_empty() {
        return ContactOutcome::Damage;
    }

    let top = stomped
        .iter()
        .map(|c| c.head_line)
        .fold(f32::INFINITY, f32::min);

    ContactOutcome::Stomp {
        killed: stomped.iter().map(|c| c.id).collect(),
        rest_y: top - char_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAR_HEIGHT: f32 = 384.0;

    #[test]
    fn descending_within_tolerance_is_a_stomp() {
        assert!(is_stomp(true, 400.0, 360.0));
        // Exactly at the tolerance edge still qualifies.
        assert!(is_stomp(true, 360.0 + STOMP_TOLERANCE, 360.0));
    }

    #[test]
    fn rising_character_never_stomps() {
        assert!(!is_stomp(false, 360.0, 360.0));
    }

    #[test]
    fn feet_too_deep_is_body_contact() {
        assert!(!is_stomp(true, 360.0 + STOMP_TOLERANCE + 1.0, 360.0));
    }

    #[test]
    fn single_stomp_kills_and_takes_no_damage() {
        let contacts = [Contact { id: 1usize, head_line: 360.0 }];
        let outcome = resolve_contacts(true, 400.0, CHAR_HEIGHT, &contacts);
        assert_eq!(
            outcome,
            ContactOutcome::Stomp {
                killed: vec![1],
                rest_y: 360.0 - CHAR_HEIGHT,
            }
        );
    }

    #[test]
    fn group_stomp_kills_all_and_rests_on_highest_head() {
        // Two killable enemies at different head heights in one tick.
        let contacts = [
            Contact { id: 1usize, head_line: 380.0 },
            Contact { id: 2usize, head_line: 360.0 },
        ];
        let outcome = resolve_contacts(true, 410.0, CHAR_HEIGHT, &contacts);
        match outcome {
            ContactOutcome::Stomp { killed, rest_y } => {
                assert_eq!(killed, vec![1, 2]);
                // Higher head line is the smaller y.
                assert_eq!(rest_y, 360.0 - CHAR_HEIGHT);
            }
            other => panic!("expected group stomp, got {other:?}"),
        }
    }

    #[test]
    fn mixed_contacts_only_kill_qualifiers() {
        let contacts = [
            Contact { id: 1usize, head_line: 360.0 },
            // Head line far above the feet: side contact, not stompable.
            Contact { id: 2usize, head_line: 200.0 },
        ];
        let outcome = resolve_contacts(true, 400.0, CHAR_HEIGHT, &contacts);
        match outcome {
            ContactOutcome::Stomp { killed, .. } => assert_eq!(killed, vec![1]),
            other => panic!("expected stomp, got {other:?}"),
        }
    }

    #[test]
    fn contact_without_stomp_damages_once() {
        let contacts = [
            Contact { id: 1usize, head_line: 100.0 },
            Contact { id: 2usize, head_line: 120.0 },
        ];
        // Walking into two enemies yields a single Damage outcome, never
        // one per collider.
        let outcome = resolve_contacts(false, 460.0, CHAR_HEIGHT, &contacts);
        assert_eq!(outcome, ContactOutcome::Damage);
    }

    #[test]
    fn no_contacts_no_outcome() {
        let outcome = resolve_contacts::<usize>(true, 400.0, CHAR_HEIGHT, &[]);
        assert_eq!(outcome, ContactOutcome::None);
    }
}
