//! Option Greeks
//!
//! First-order sensitivities of a European option price.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First-order option sensitivities.
///
/// Holds exactly delta, gamma, theta, vega and rho. Serialises to an object
/// with those five keys and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Theta: -∂V/∂T, per year
    pub theta: f64,
    /// Vega: ∂V/∂σ, per unit volatility
    pub vega: f64,
    /// Rho: ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Names of the Greeks in reporting order.
    pub const NAMES: [&'static str; 5] = ["delta", "gamma", "theta", "vega", "rho"];

    /// Creates a new set of Greeks.
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Name/value pairs in reporting order.
    ///
    /// # Examples
    /// ```
    /// use pricer_bsm::analytical::Greeks;
    ///
    /// let g = Greeks::new(0.5, 0.02, -6.0, 38.0, 53.0);
    /// let names: Vec<&str> = g.entries().iter().map(|(name, _)| *name).collect();
    /// assert_eq!(names, Greeks::NAMES);
    /// ```
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("delta", self.delta),
            ("gamma", self.gamma),
            ("theta", self.theta),
            ("vega", self.vega),
            ("rho", self.rho),
        ]
    }

    /// Looks up a Greek by its lowercase name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// True when every Greek is a finite number.
    pub fn is_finite(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Greeks {
        Greeks::new(0.6368, 0.0188, -6.414, 37.524, 53.232)
    }

    #[test]
    fn test_entries_order_matches_names() {
        let g = sample();
        for ((name, _), expected) in g.entries().iter().zip(Greeks::NAMES) {
            assert_eq!(*name, expected);
        }
    }

    #[test]
    fn test_get_by_name() {
        let g = sample();
        assert_eq!(g.get("delta"), Some(0.6368));
        assert_eq!(g.get("rho"), Some(53.232));
        assert_eq!(g.get("vanna"), None);
        assert_eq!(g.get("Delta"), None);
    }

    #[test]
    fn test_is_finite() {
        assert!(sample().is_finite());
        let g = Greeks {
            gamma: f64::NAN,
            ..sample()
        };
        assert!(!g.is_finite());
        let g = Greeks {
            theta: f64::NEG_INFINITY,
            ..sample()
        };
        assert!(!g.is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_exactly_five_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for name in Greeks::NAMES {
            assert!(object.contains_key(name), "missing key {}", name);
        }
    }
}
