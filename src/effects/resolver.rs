//! Power-up resolution.
//!
//! `EffectResolver::resolve` turns one activation into an ordered list of
//! effects without touching any state. `EffectResolver::apply` writes those
//! effects onto a roster. Keeping the two apart lets the engine show what
//! happened and lets tests check the computed effects directly.
//!
//! Random draws happen in a fixed order: the target team first, then the
//! point amount. Zero-valued deltas are never emitted.

use tracing::{debug, warn};

use super::effect::{EffectList, PowerUpEffect, StatusEffect};
use super::targeting::{highest_team, lowest_team, pick_opponent};
use crate::core::{GameError, RandomSource, Result, Team, TeamId};
use crate::powerups::{PowerUpId, PowerUpRegistry};

/// Range used by the random grant, loss and transfer power-ups.
pub const DEFAULT_RANGE: (u32, u32) = (5, 25);

/// Flat amount for gold and the cap for boom.
pub const FLAT_AMOUNT: u32 = 50;

/// Resolves power-up activations against a team roster.
#[derive(Clone, Copy, Debug)]
pub struct EffectResolver<'a> {
    registry: &'a PowerUpRegistry,
}

impl<'a> EffectResolver<'a> {
    /// Create a resolver reading definitions from `registry`.
    #[must_use]
    pub fn new(registry: &'a PowerUpRegistry) -> Self {
        Self { registry }
    }

    /// Compute the effects of `activator` triggering `power_up`.
    ///
    /// Power-ups that need another team resolve to an empty list when the
    /// roster has only one team.
    pub fn resolve<R: RandomSource + ?Sized>(
        &self,
        power_up: PowerUpId,
        activator: TeamId,
        teams: &[Team],
        rng: &mut R,
    ) -> Result<EffectList> {
        let definition = self.registry.get(power_up)?;
        let actor = teams
            .iter()
            .find(|t| t.id == activator)
            .ok_or(GameError::UnknownTeam { team: activator })?;
        let range = definition.effect.range_or(DEFAULT_RANGE);
        let mut effects = EffectList::new();

        match power_up {
            PowerUpId::Fairy | PowerUpId::Magnet => {
                if let Some(target) = pick_opponent(teams, activator, rng) {
                    let points = rng.range_inclusive(range.0, range.1);
                    let deducted = points.min(target.score);
                    push_delta(&mut effects, activator, Some(target.id), i64::from(points));
                    push_delta(&mut effects, target.id, Some(activator), -i64::from(deducted));
                }
            }

            PowerUpId::Rocket => {
                if let Some(top) = highest_team(teams) {
                    if top.id != activator {
                        let delta = i64::from(top.score) + 1 - i64::from(actor.score);
                        push_delta(&mut effects, activator, Some(top.id), delta);
                    }
                }
            }

            PowerUpId::Star => {
                push_delta(&mut effects, activator, None, i64::from(actor.score));
            }

            PowerUpId::Gold => {
                let (amount, _) = definition.effect.range_or((FLAT_AMOUNT, FLAT_AMOUNT));
                push_delta(&mut effects, activator, None, i64::from(amount));
            }

            PowerUpId::Gift | PowerUpId::Ghost => {
                let points = rng.range_inclusive(range.0, range.1);
                push_delta(&mut effects, activator, None, i64::from(points));
            }

            PowerUpId::Thief | PowerUpId::Heart | PowerUpId::Lifesaver => {
                // The activator pays the drawn amount to a random team.
                if let Some(payee) = pick_opponent(teams, activator, rng) {
                    let amount = i64::from(rng.range_inclusive(range.0, range.1).min(actor.score));
                    push_delta(&mut effects, activator, Some(payee.id), -amount);
                    push_delta(&mut effects, payee.id, Some(activator), amount);
                }
            }

            PowerUpId::Banana => {
                if let Some(bottom) = lowest_team(teams) {
                    let floor = bottom.score.saturating_sub(1);
                    if actor.score > floor {
                        let delta = i64::from(floor) - i64::from(actor.score);
                        let counterparty = (bottom.id != activator).then_some(bottom.id);
                        push_delta(&mut effects, activator, counterparty, delta);
                    }
                }
            }

            PowerUpId::Eraser => {
                push_delta(&mut effects, activator, None, -i64::from(actor.score));
            }

            PowerUpId::Virus => {
                for team in teams {
                    push_delta(&mut effects, team.id, None, -i64::from(team.score));
                }
            }

            PowerUpId::Shark => {
                if let Some(target) = pick_opponent(teams, activator, rng) {
                    let amount = rng.range_inclusive(range.0, range.1).min(target.score);
                    push_delta(&mut effects, target.id, Some(activator), -i64::from(amount));
                }
            }

            PowerUpId::Boom => {
                let (cap, _) = definition.effect.range_or((FLAT_AMOUNT, FLAT_AMOUNT));
                push_delta(&mut effects, activator, None, -i64::from(cap.min(actor.score)));
            }

            PowerUpId::Baam => {
                let amount = rng.range_inclusive(range.0, range.1).min(actor.score);
                push_delta(&mut effects, activator, None, -i64::from(amount));
            }

            PowerUpId::Crocodile | PowerUpId::Trap => {
                effects.push(PowerUpEffect::status(activator, StatusEffect::no_points(1)));
            }

            PowerUpId::Seesaw => {
                if let Some(target) = pick_opponent(teams, activator, rng) {
                    let delta = i64::from(target.score) - i64::from(actor.score);
                    push_delta(&mut effects, activator, Some(target.id), delta);
                    push_delta(&mut effects, target.id, Some(activator), -delta);
                }
            }
        }

        debug!(
            power_up = %power_up,
            activator = %activator,
            effects = effects.len(),
            "Resolved power-up"
        );
        Ok(effects)
    }

    /// Apply resolved effects to a roster.
    ///
    /// Point deltas are clamped so no score drops below zero. Status effects
    /// are appended to the team's `statuses`. Effects naming a team that is
    /// not on the roster are skipped.
    pub fn apply(effects: &[PowerUpEffect], teams: &mut [Team]) {
        for effect in effects {
            let Some(team) = teams.iter_mut().find(|t| t.id == effect.team()) else {
                warn!(team = %effect.team(), "Effect names a team outside the roster");
                continue;
            };

            match effect {
                PowerUpEffect::Points { points, .. } => {
                    let applied = team.apply_delta(*points);
                    if applied != *points {
                        debug!(team = %team.id, requested = points, applied, "Clamped score delta");
                    }
                }
                PowerUpEffect::Status { status, .. } => team.statuses.push(*status),
            }
        }
    }
}

fn push_delta(effects: &mut EffectList, team: TeamId, counterparty: Option<TeamId>, points: i64) {
    if points == 0 {
        return;
    }
    effects.push(match counterparty {
        Some(other) => PowerUpEffect::transfer(team, other, points),
        None => PowerUpEffect::points(team, points),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceRng;

    fn roster(scores: &[u32]) -> Vec<Team> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| Team::new(TeamId::new(i as u8), format!("T{i}")).with_score(s))
            .collect()
    }

    fn resolve(power_up: PowerUpId, activator: u8, teams: &[Team], samples: &[f64]) -> EffectList {
        let registry = PowerUpRegistry::standard();
        let mut rng = SequenceRng::new(samples.iter().copied());
        EffectResolver::new(&registry)
            .resolve(power_up, TeamId::new(activator), teams, &mut rng)
            .unwrap()
    }

    fn scores_after(
        power_up: PowerUpId,
        activator: u8,
        scores: &[u32],
        samples: &[f64],
    ) -> Vec<u32> {
        let mut teams = roster(scores);
        let effects = resolve(power_up, activator, &teams, samples);
        EffectResolver::apply(&effects, &mut teams);
        teams.iter().map(|t| t.score).collect()
    }

    const A: TeamId = TeamId::new(0);
    const B: TeamId = TeamId::new(1);

    #[test]
    fn test_fairy_grants_full_and_clamps_target() {
        // target pick, then 0.99 -> top of 10..=30
        let effects = resolve(PowerUpId::Fairy, 0, &roster(&[0, 12]), &[0.0, 0.99]);
        assert_eq!(
            effects.as_slice(),
            &[PowerUpEffect::transfer(A, B, 30), PowerUpEffect::transfer(B, A, -12)]
        );
    }

    #[test]
    fn test_magnet_uses_its_range() {
        assert_eq!(scores_after(PowerUpId::Magnet, 0, &[0, 100], &[0.0, 0.0]), vec![5, 95]);
    }

    #[test]
    fn test_rocket_no_op_when_leading() {
        assert!(resolve(PowerUpId::Rocket, 0, &roster(&[100, 80, 60]), &[]).is_empty());
    }

    #[test]
    fn test_rocket_jumps_past_leader() {
        assert_eq!(scores_after(PowerUpId::Rocket, 2, &[100, 80, 60], &[]), vec![100, 80, 101]);
        // Tied with the leader but later in roster order
        assert_eq!(scores_after(PowerUpId::Rocket, 1, &[50, 50], &[]), vec![50, 51]);
    }

    #[test]
    fn test_star_doubles() {
        assert_eq!(scores_after(PowerUpId::Star, 0, &[35, 0], &[]), vec![70, 0]);
        assert!(resolve(PowerUpId::Star, 0, &roster(&[0, 10]), &[]).is_empty());
    }

    #[test]
    fn test_gold_flat_grant() {
        assert_eq!(scores_after(PowerUpId::Gold, 1, &[0, 5], &[]), vec![0, 55]);
    }

    #[test]
    fn test_gift_and_ghost_draw_range() {
        assert_eq!(scores_after(PowerUpId::Gift, 0, &[0, 0], &[0.0]), vec![5, 0]);
        assert_eq!(scores_after(PowerUpId::Ghost, 0, &[0, 0], &[0.99]), vec![25, 0]);
    }

    #[test]
    fn test_thief_clamps_to_payer_score() {
        // A:10 draws 25 -> pays min(25, 10)
        let effects = resolve(PowerUpId::Thief, 0, &roster(&[10, 0]), &[0.0, 0.99]);
        assert_eq!(
            effects.as_slice(),
            &[PowerUpEffect::transfer(A, B, -10), PowerUpEffect::transfer(B, A, 10)]
        );
        assert_eq!(scores_after(PowerUpId::Thief, 0, &[10, 0], &[0.0, 0.99]), vec![0, 10]);
    }

    #[test]
    fn test_heart_and_lifesaver_pay_out() {
        assert_eq!(scores_after(PowerUpId::Heart, 0, &[40, 0, 0], &[0.99, 0.0]), vec![35, 0, 5]);
        assert_eq!(scores_after(PowerUpId::Lifesaver, 1, &[0, 40], &[0.0, 0.5]), vec![15, 25]);
    }

    #[test]
    fn test_transfer_with_empty_payer_is_empty() {
        assert!(resolve(PowerUpId::Thief, 0, &roster(&[0, 50]), &[0.0, 0.5]).is_empty());
    }

    #[test]
    fn test_banana_drags_below_last() {
        assert_eq!(scores_after(PowerUpId::Banana, 0, &[90, 40, 20], &[]), vec![19, 40, 20]);
        // The last team still drops below its own score
        assert_eq!(scores_after(PowerUpId::Banana, 2, &[90, 40, 20], &[]), vec![90, 40, 19]);
        // Floor is zero
        assert_eq!(scores_after(PowerUpId::Banana, 0, &[30, 0], &[]), vec![0, 0]);
        assert!(resolve(PowerUpId::Banana, 0, &roster(&[0, 0]), &[]).is_empty());
    }

    #[test]
    fn test_banana_tied_lowest_ignores_roster_order() {
        assert_eq!(scores_after(PowerUpId::Banana, 0, &[20, 90, 20], &[]), vec![19, 90, 20]);
        assert_eq!(scores_after(PowerUpId::Banana, 2, &[20, 90, 20], &[]), vec![20, 90, 19]);
    }

    #[test]
    fn test_eraser_zeroes_activator() {
        let effects = resolve(PowerUpId::Eraser, 0, &roster(&[30, 20]), &[]);
        assert_eq!(effects.as_slice(), &[PowerUpEffect::points(A, -30)]);
        assert_eq!(scores_after(PowerUpId::Eraser, 0, &[30, 20], &[]), vec![0, 20]);
    }

    #[test]
    fn test_virus_zeroes_everyone_with_points() {
        let effects = resolve(PowerUpId::Virus, 1, &roster(&[30, 0, 10]), &[]);
        assert_eq!(effects.len(), 2);
        assert_eq!(scores_after(PowerUpId::Virus, 1, &[30, 0, 10], &[]), vec![0, 0, 0]);
    }

    #[test]
    fn test_shark_hits_target_only() {
        let effects = resolve(PowerUpId::Shark, 0, &roster(&[10, 8]), &[0.0, 0.99]);
        assert_eq!(effects.as_slice(), &[PowerUpEffect::transfer(B, A, -8)]);
        assert_eq!(scores_after(PowerUpId::Shark, 0, &[10, 8], &[0.0, 0.99]), vec![10, 0]);
    }

    #[test]
    fn test_boom_and_baam() {
        assert_eq!(scores_after(PowerUpId::Boom, 0, &[80, 0], &[]), vec![30, 0]);
        assert_eq!(scores_after(PowerUpId::Boom, 0, &[20, 0], &[]), vec![0, 0]);
        assert_eq!(scores_after(PowerUpId::Baam, 0, &[20, 0], &[0.99]), vec![0, 0]);
        assert_eq!(scores_after(PowerUpId::Baam, 0, &[20, 0], &[0.0]), vec![15, 0]);
    }

    #[test]
    fn test_status_power_ups() {
        for power_up in [PowerUpId::Crocodile, PowerUpId::Trap] {
            let mut teams = roster(&[10, 10]);
            let effects = resolve(power_up, 1, &teams, &[]);
            assert_eq!(effects.as_slice(), &[PowerUpEffect::status(B, StatusEffect::no_points(1))]);

            EffectResolver::apply(&effects, &mut teams);
            assert_eq!(teams[1].score, 10);
            assert_eq!(teams[1].statuses, vec![StatusEffect::no_points(1)]);
        }
    }

    #[test]
    fn test_seesaw_swaps_scores() {
        assert_eq!(scores_after(PowerUpId::Seesaw, 0, &[10, 70, 30], &[0.99]), vec![30, 70, 10]);
        assert!(resolve(PowerUpId::Seesaw, 0, &roster(&[20, 20]), &[0.0]).is_empty());
    }

    #[test]
    fn test_single_team_targeted_power_ups_are_empty() {
        let teams = roster(&[40]);
        for power_up in PowerUpId::ALL.into_iter().filter(|p| p.needs_target()) {
            assert!(resolve(power_up, 0, &teams, &[0.5]).is_empty(), "{power_up}");
        }
    }

    #[test]
    fn test_unknown_activator() {
        let registry = PowerUpRegistry::standard();
        let mut rng = SequenceRng::new([0.5]);
        let err = EffectResolver::new(&registry)
            .resolve(PowerUpId::Gold, TeamId::new(9), &roster(&[0, 0]), &mut rng)
            .unwrap_err();
        assert_eq!(err, GameError::UnknownTeam { team: TeamId::new(9) });
    }

    #[test]
    fn test_unregistered_power_up() {
        let registry = PowerUpRegistry::new();
        let mut rng = SequenceRng::new([0.5]);
        let err = EffectResolver::new(&registry)
            .resolve(PowerUpId::Gold, A, &roster(&[0, 0]), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::UnknownPowerUp { .. }));
    }

    #[test]
    fn test_apply_clamps_and_skips_strangers() {
        let mut teams = roster(&[5, 5]);
        let effects = [
            PowerUpEffect::points(A, -50),
            PowerUpEffect::points(TeamId::new(7), 100),
            PowerUpEffect::points(B, 1),
        ];

        EffectResolver::apply(&effects, &mut teams);

        assert_eq!(teams[0].score, 0);
        assert_eq!(teams[1].score, 6);
    }
}
