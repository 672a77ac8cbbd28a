use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Circle of confusion and sensor height, both in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorProfile {
    pub coc: f64,
    pub height: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sensor {
    #[default]
    FullFrame,
    ApsC,
    MicroFourThirds,
    Smartphone,
}

impl Sensor {
    pub const ALL: [Self; 4] = [
        Self::FullFrame,
        Self::ApsC,
        Self::MicroFourThirds,
        Self::Smartphone,
    ];

    pub const fn profile(self) -> SensorProfile {
        match self {
            Self::FullFrame => SensorProfile {
                coc: 0.029,
                height: 24.0,
            },
            Self::ApsC => SensorProfile {
                coc: 0.019,
                height: 15.6,
            },
            Self::MicroFourThirds => SensorProfile {
                coc: 0.015,
                height: 13.0,
            },
            Self::Smartphone => SensorProfile {
                coc: 0.002,
                height: 7.3,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::FullFrame => "Full Frame",
            Self::ApsC => "APS-C",
            Self::MicroFourThirds => "Micro 4/3",
            Self::Smartphone => "Smartphone",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::FullFrame => "full-frame",
            Self::ApsC => "aps-c",
            Self::MicroFourThirds => "micro-four-thirds",
            Self::Smartphone => "smartphone",
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sensor {
    type Err = SetupError;

    /// Accepts the display name (`"Micro 4/3"`) or the kebab-case form (`"micro-four-thirds"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|sensor| sensor.name().eq_ignore_ascii_case(s) || sensor.slug() == s)
            .ok_or_else(|| SetupError::UnknownSensor(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_constants() {
        assert_eq!(
            Sensor::FullFrame.profile(),
            SensorProfile {
                coc: 0.029,
                height: 24.0
            }
        );
        assert_eq!(Sensor::Smartphone.profile().coc, 0.002);
        assert_eq!(Sensor::ApsC.profile().height, 15.6);
        assert_eq!(Sensor::MicroFourThirds.profile().height, 13.0);
    }

    #[test]
    fn parse() {
        assert_eq!("APS-C".parse(), Ok(Sensor::ApsC));
        assert_eq!("aps-c".parse(), Ok(Sensor::ApsC));
        assert_eq!(" micro 4/3 ".parse(), Ok(Sensor::MicroFourThirds));
        assert_eq!("full-frame".parse(), Ok(Sensor::FullFrame));
        assert_eq!(
            "Medium Format".parse::<Sensor>(),
            Err(SetupError::UnknownSensor("Medium Format".to_owned()))
        );
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&Sensor::MicroFourThirds).unwrap();
        assert_eq!(json, "\"micro-four-thirds\"");
        let sensor: Sensor = serde_json::from_str("\"smartphone\"").unwrap();
        assert_eq!(sensor, Sensor::Smartphone);
    }
}
