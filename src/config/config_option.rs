use crate::types::err::{self};

/// A configurable value, bounded by some minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(err::ConfigError::OutOfBounds { name: self.name })
        }
    }
}

impl<T: Clone + PartialOrd + std::str::FromStr> ConfigOption<T> {
    /// Parses and sets the value of the option.
    pub fn set_from_str(&mut self, request: &str) -> Result<(), err::ConfigError> {
        match request.parse::<T>() {
            Ok(value) => self.set(value),
            Err(_) => Err(err::ConfigError::Unparsable { name: self.name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width() -> ConfigOption<usize> {
        ConfigOption {
            name: "batch_width",
            min: 1,
            max: 8,
            value: 4,
        }
    }

    #[test]
    fn bounds_respected() {
        let mut option = width();

        assert!(option.set(8).is_ok());
        assert_eq!(option.value, 8);

        assert_eq!(
            option.set(0),
            Err(err::ConfigError::OutOfBounds { name: "batch_width" })
        );
        assert_eq!(option.value, 8);
    }

    #[test]
    fn parsed() {
        let mut option = width();

        assert!(option.set_from_str("2").is_ok());
        assert_eq!(option.value, 2);

        assert_eq!(
            option.set_from_str("two"),
            Err(err::ConfigError::Unparsable { name: "batch_width" })
        );
    }
}
