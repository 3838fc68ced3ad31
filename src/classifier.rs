use crate::models::Classification;

const HEALTHY_MAX_CALORIES: f64 = 200.0;
const HEALTHY_MIN_PROTEINS: f64 = 10.0;
const MODERATE_MAX_CALORIES: f64 = 500.0;
const MODERATE_MIN_PROTEINS: f64 = 5.0;

/// Maps nutritional values to a label. Bands are checked in order:
/// `calories < 200 && proteins > 10` is Healthy,
/// `200 <= calories < 500 && proteins >= 5` is Moderately Healthy,
/// anything else is Unhealthy.
pub(crate) fn classify(calories: f64, proteins: f64) -> Classification {
    if calories < HEALTHY_MAX_CALORIES && proteins > HEALTHY_MIN_PROTEINS {
        Classification::Healthy
    } else if (HEALTHY_MAX_CALORIES..MODERATE_MAX_CALORIES).contains(&calories)
        && proteins >= MODERATE_MIN_PROTEINS
    {
        Classification::ModeratelyHealthy
    } else {
        Classification::Unhealthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification::*;

    #[test]
    fn test_one_case_per_band() {
        assert_eq!(classify(150.0, 12.0), Healthy);
        assert_eq!(classify(300.0, 6.0), ModeratelyHealthy);
        assert_eq!(classify(600.0, 20.0), Unhealthy);
        assert_eq!(classify(100.0, 2.0), Unhealthy);
    }

    #[test]
    fn test_low_calorie_low_protein_is_unhealthy() {
        // under 200 calories but not enough protein, and outside the moderate band
        assert_eq!(classify(95.0, 0.3), Unhealthy);
        assert_eq!(classify(199.0, 10.0), Unhealthy);
    }

    #[test]
    fn test_calorie_boundaries() {
        assert_eq!(classify(199.99, 10.01), Healthy);
        assert_eq!(classify(200.0, 10.01), ModeratelyHealthy);
        assert_eq!(classify(200.0, 10.0), ModeratelyHealthy);
        assert_eq!(classify(499.99, 5.0), ModeratelyHealthy);
        assert_eq!(classify(500.0, 5.0), Unhealthy);
        assert_eq!(classify(500.0, 50.0), Unhealthy);
    }

    #[test]
    fn test_protein_boundaries() {
        assert_eq!(classify(0.0, 10.0), Unhealthy);
        assert_eq!(classify(0.0, 10.5), Healthy);
        assert_eq!(classify(250.0, 5.0), ModeratelyHealthy);
        assert_eq!(classify(250.0, 4.99), Unhealthy);
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(classify(0.0, 0.0), Unhealthy);
    }
}
