// Shared test builder for people pins.

use crate::modules::map::core::pins::{LatLng, Pin};

pub struct PinBuilder {
    inner: Pin,
}

#[allow(dead_code)]
impl PinBuilder {
    pub fn new(id: i64, pin_type: i64) -> Self {
        Self {
            inner: Pin {
                id: Some(id),
                pin_type: Some(pin_type),
                tags: None,
                latlng: None,
            },
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.inner.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn latlng(mut self, lat: f64, lng: f64) -> Self {
        self.inner.latlng = Some(LatLng::new(lat, lng));
        self
    }

    pub fn build(self) -> Pin {
        self.inner
    }
}

#[cfg(test)]
mod pin_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_builds_a_bare_pin() {
        let pin = PinBuilder::new(4, 2).build();
        assert_eq!(pin.id, Some(4));
        assert_eq!(pin.pin_type, Some(2));
        assert_eq!(pin.tags, None);
        assert_eq!(pin.latlng, None);
    }

    #[rstest]
    fn setters_fill_the_optional_fields() {
        let pin = PinBuilder::new(4, 2).tags(&["a", "b"]).latlng(1.5, -2.5).build();
        assert_eq!(pin.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(pin.latlng, Some(LatLng::new(1.5, -2.5)));
    }
}
