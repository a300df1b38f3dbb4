/// Rounds `value` to a "nice" number of the form `{1, 2, 2.5, 5, 10} × 10^k`.
///
/// With `round = true` the fraction snaps to the nearest candidate, otherwise
/// it is raised to the next candidate (ceiling behavior). Non-positive or
/// non-finite input is returned unchanged.
#[must_use]
pub fn nice_number(value: f64, round: bool) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return value;
    }

    let exponent = value.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = value / magnitude;

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 4.5 {
            2.5
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * magnitude
}

/// Smallest number of decimal places that represents multiples of `spacing`.
#[must_use]
pub fn decimals_for_spacing(spacing: f64) -> u32 {
    if !spacing.is_finite() || spacing <= 0.0 {
        return 0;
    }
    for decimals in 0..=12u32 {
        let scaled = spacing * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0) {
            return decimals;
        }
    }
    12
}
