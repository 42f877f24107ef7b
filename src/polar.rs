use std::f64::consts::FRAC_PI_2;

/// A point of the trajectory in the pit's polar frame.
///
/// `radius` is `log2(x)`; `theta` is the deviation of `log2(x)` from its
/// nearest integer, spread over a quarter turn around the vertical axis.
/// Powers of two land exactly on theta = pi/2, so the `2^n` tower forms
/// the center line of the pit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub radius: f64,
    pub theta: f64,
}

impl PolarPoint {
    /// Convert to cartesian coordinates for the drawing backend.
    #[inline]
    pub fn to_cartesian(self) -> (f64, f64) {
        (
            self.radius * self.theta.cos(),
            self.radius * self.theta.sin(),
        )
    }
}

/// Map one sequence value into the polar frame.
pub fn map_value(x: u128) -> PolarPoint {
    let log2 = (x as f64).log2();
    let deviation = log2 - log2.round();
    PolarPoint {
        radius: log2,
        theta: FRAC_PI_2 + deviation * FRAC_PI_2,
    }
}

pub fn map_sequence(sequence: &[u128]) -> Vec<PolarPoint> {
    sequence.iter().map(|&x| map_value(x)).collect()
}

/// Integer spacing between labeled radial gridlines, keeping the label
/// count near ten no matter how deep the pit gets.
pub fn radial_tick_step(max_radius: f64) -> u32 {
    let r_max = max_radius.ceil() as u32;
    (r_max / 10).max(1)
}

/// Exponents of the labeled gridlines: `step, 2*step, ..` up to the pit rim.
pub fn radial_ticks(max_radius: f64) -> Vec<u32> {
    let r_max = max_radius.ceil() as u32;
    let step = radial_tick_step(max_radius);
    (1..)
        .map(|i| i * step)
        .take_while(|&t| t <= r_max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn powers_of_two_sit_on_the_center_line() {
        for k in 0..=60u32 {
            let p = map_value(1u128 << k);
            assert_eq!(p.theta, FRAC_PI_2, "2^{} off the center line", k);
            assert_eq!(p.radius, f64::from(k));
        }
    }

    #[test]
    fn deviation_stays_within_a_quarter_turn() {
        for x in 1..=10_000u128 {
            let p = map_value(x);
            assert!(p.theta >= PI / 4.0 && p.theta <= 3.0 * PI / 4.0);
        }
    }

    #[test]
    fn exit_value_sits_at_the_origin() {
        let p = map_value(1);
        assert_eq!(p.radius, 0.0);
        let (x, y) = p.to_cartesian();
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn cartesian_conversion_matches_polar_definition() {
        let p = PolarPoint {
            radius: 2.0,
            theta: FRAC_PI_2,
        };
        let (x, y) = p.to_cartesian();
        assert!(x.abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn shallow_pits_use_unit_tick_spacing() {
        assert_eq!(radial_tick_step(0.0), 1);
        assert_eq!(radial_tick_step(9.3), 1);
        assert_eq!(radial_ticks(9.3), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn deep_pits_thin_their_labels() {
        // ceil(100.0) / 10 = 10 -> exactly ten labels.
        assert_eq!(radial_tick_step(100.0), 10);
        assert_eq!(radial_ticks(100.0).len(), 10);
        assert_eq!(radial_ticks(100.0).last(), Some(&100));
    }

    #[test]
    fn tick_step_for_the_reference_trajectory() {
        // n = 27 peaks at 9232, log2 ~= 13.17 -> 14 gridlines at unit step.
        let max_radius = (9232f64).log2();
        assert_eq!(radial_tick_step(max_radius), 1);
        assert_eq!(radial_ticks(max_radius).len(), 14);
    }
}
