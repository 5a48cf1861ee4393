/// Attribute key naming the service that produced the telemetry.
///
/// Matches the OpenTelemetry semantic-convention key.
pub const SERVICE_NAME_KEY: &str = "service.name";

/// Immutable service metadata attached to exported telemetry.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Resource {
    attributes: Vec<(String, String)>,
}

impl Resource {
    /// Create a resource describing a service with the given name.
    pub fn new(service_name: &str) -> Self {
        Resource {
            attributes: vec![(SERVICE_NAME_KEY.to_owned(), service_name.to_owned())],
        }
    }

    /// All attributes as key/value pairs.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The value of the `service.name` attribute, if present.
    pub fn service_name(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == SERVICE_NAME_KEY)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resource_carries_service_name_attribute() {
        let resource = Resource::new("checkout");
        assert_eq!(resource.service_name(), Some("checkout"));
        assert_eq!(
            resource.attributes(),
            &[("service.name".to_owned(), "checkout".to_owned())]
        );
    }
}
