// Coordinate clamping and wrapping for globe placement

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub lat: f64,
    pub lon: f64,
    pub adjustments: Vec<String>, // empty when the input was already in range
}

impl Normalized {
    pub fn is_adjusted(&self) -> bool {
        !self.adjustments.is_empty()
    }
}

/// Clamps latitude into [-90, 90] and wraps longitude into [-180, 180].
/// Non-finite inputs are replaced with 0.
pub fn normalize(lat: f64, lon: f64) -> Normalized {
    let mut adjustments = Vec::new();

    let lat = if !lat.is_finite() {
        adjustments.push(format!("latitude {lat} is not a number, set to 0"));
        0.0
    } else if lat > 90.0 {
        adjustments.push(format!("latitude {lat} above 90, clamped"));
        90.0
    } else if lat < -90.0 {
        adjustments.push(format!("latitude {lat} below -90, clamped"));
        -90.0
    } else {
        lat
    };

    let lon = if !lon.is_finite() {
        adjustments.push(format!("longitude {lon} is not a number, set to 0"));
        0.0
    } else {
        let mut wrapped = lon;
        while wrapped > 180.0 {
            wrapped -= 360.0;
        }
        while wrapped < -180.0 {
            wrapped += 360.0;
        }
        if wrapped != lon {
            adjustments.push(format!("longitude {lon} wrapped to {wrapped}"));
        }
        wrapped
    };

    Normalized { lat, lon, adjustments }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_untouched() {
        let n = normalize(48.85, 2.35);
        assert_eq!((n.lat, n.lon), (48.85, 2.35));
        assert!(!n.is_adjusted());

        let edge = normalize(-90.0, 180.0);
        assert_eq!((edge.lat, edge.lon), (-90.0, 180.0));
        assert!(!edge.is_adjusted());
    }

    #[test]
    fn latitude_clamps() {
        assert_eq!(normalize(95.0, 0.0).lat, 90.0);
        assert_eq!(normalize(-120.0, 0.0).lat, -90.0);
        assert!(normalize(95.0, 0.0).is_adjusted());
    }

    #[test]
    fn longitude_wraps() {
        assert_eq!(normalize(0.0, 190.0).lon, -170.0);
        assert_eq!(normalize(0.0, -190.0).lon, 170.0);
        assert_eq!(normalize(0.0, 720.0).lon, 0.0);
    }

    #[test]
    fn non_finite_becomes_zero() {
        let n = normalize(f64::NAN, f64::INFINITY);
        assert_eq!((n.lat, n.lon), (0.0, 0.0));
        assert_eq!(n.adjustments.len(), 2);
    }
}
