//! Unit tests for single-position rating computation

use super::*;
use crate::engine::{familiarity::FamiliarityTier, weights::weights_for};

fn reference_attributes() -> Attributes {
    Attributes::new(84, 32, 77, 74, 87, 83).with_goalkeeping(0)
}

#[cfg(test)]
mod rounding_tests {
    use super::*;

    #[test]
    fn test_finalize_rounds_to_nearest() {
        assert_eq!(finalize_ovr(8219, 0), 82);
        assert_eq!(finalize_ovr(8219, -5), 77);
        assert_eq!(finalize_ovr(5643, -20), 36);
        assert_eq!(finalize_ovr(8447, -8), 76);
    }

    #[test]
    fn test_finalize_rounds_half_up() {
        assert_eq!(finalize_ovr(5050, 0), 51);
        assert_eq!(finalize_ovr(5049, 0), 50);
        assert_eq!(finalize_ovr(7650, -5), 72);
    }

    #[test]
    fn test_finalize_clamps_low() {
        assert_eq!(finalize_ovr(0, -20), 0);
        assert_eq!(finalize_ovr(1549, -20), 0);
        assert_eq!(finalize_ovr(2050, -20), 1);
    }

    #[test]
    fn test_finalize_clamps_high() {
        assert_eq!(finalize_ovr(9900, 0), 99);
        assert_eq!(finalize_ovr(12_000, 0), 99);
    }
}

#[cfg(test)]
mod calculate_tests {
    use super::*;

    #[test]
    fn test_primary_position_has_no_penalty() {
        let result = calculate(
            Position::LB,
            &reference_attributes(),
            &weights_for(Position::LB),
            FamiliarityTier::Primary.into(),
        );

        assert!(result.success);
        assert_eq!(result.position, Position::LB);
        assert_eq!(result.ovr, 82);
        assert_eq!(result.penalty, 0);
        assert_eq!(result.familiarity, FamiliarityTier::Primary);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_familiar_position() {
        let result = calculate(
            Position::LWB,
            &reference_attributes(),
            &weights_for(Position::LWB),
            FamiliarityTier::Familiar.into(),
        );

        // 77*0.19 + 87*0.44 + 74*0.17 + 84*0.10 + 83*0.10 = 82.19, minus 5
        assert!((result.weighted_average - 82.19).abs() < 1e-9);
        assert_eq!(result.ovr, 77);
        assert_eq!(result.penalty, -5);
        assert_eq!(result.familiarity, FamiliarityTier::Familiar);
    }

    #[test]
    fn test_unfamiliar_position() {
        let result = calculate(
            Position::ST,
            &reference_attributes(),
            &weights_for(Position::ST),
            FamiliarityTier::Unfamiliar.into(),
        );

        assert!((result.weighted_average - 56.43).abs() < 1e-9);
        assert_eq!(result.ovr, 36);
        assert_eq!(result.penalty, -20);
    }

    #[test]
    fn test_goalkeeper_uses_goalkeeping_only() {
        let attrs = Attributes::new(99, 99, 99, 99, 99, 99).with_goalkeeping(88);
        let result = calculate(
            Position::GK,
            &attrs,
            &weights_for(Position::GK),
            FamiliarityTier::Primary.into(),
        );

        assert!(result.success);
        assert_eq!(result.weighted_average, 88.0);
        assert_eq!(result.ovr, 88);
    }

    #[test]
    fn test_missing_goalkeeping_rates_as_zero() {
        let attrs = Attributes::new(70, 70, 70, 70, 70, 70);
        assert_eq!(weighted_hundredths(Position::GK, &attrs, &weights_for(Position::GK)), 0);

        let result = calculate(
            Position::GK,
            &attrs,
            &weights_for(Position::GK),
            FamiliarityTier::Unfamiliar.into(),
        );
        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.weighted_average, 0.0);
        assert_eq!(result.ovr, 0);
        assert_eq!(result.penalty, -20);
    }

    #[test]
    fn test_outfield_ignores_goalkeeping() {
        let with_gk = Attributes::new(60, 60, 60, 60, 60, 60).with_goalkeeping(99);
        let without_gk = Attributes::new(60, 60, 60, 60, 60, 60);
        let weights = weights_for(Position::CM);

        let a = calculate(Position::CM, &with_gk, &weights, FamiliarityTier::Primary.into());
        let b = calculate(Position::CM, &without_gk, &weights, FamiliarityTier::Primary.into());
        assert_eq!(a, b);
        assert_eq!(a.ovr, 60);
    }

    #[test]
    fn test_zero_attributes_clamp_to_zero() {
        let attrs = Attributes::default();
        let result = calculate(
            Position::CB,
            &attrs,
            &weights_for(Position::CB),
            FamiliarityTier::Unfamiliar.into(),
        );
        assert!(result.success);
        assert_eq!(result.ovr, 0);
        assert_eq!(result.penalty, -20);
    }
}
