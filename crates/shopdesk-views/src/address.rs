use shopdesk_core::types::DeliveryAddress;

pub const ADDRESS_UNAVAILABLE: &str = "Delivery address not available";

/// One-line display form of a delivery address.
///
/// A pre-formatted string wins; otherwise the components are joined in
/// display order. An absent or fully-empty address renders as
/// unavailable rather than erroring.
pub fn format_delivery_address(address: Option<&DeliveryAddress>) -> String {
    let Some(address) = address else {
        return ADDRESS_UNAVAILABLE.to_string();
    };

    if !address.formatted.is_empty() {
        return address.formatted.clone();
    }

    let mut parts: Vec<String> = Vec::new();
    if !address.street.is_empty() {
        parts.push(address.street.clone());
    }
    if !address.area.is_empty() {
        parts.push(address.area.clone());
    }
    if !address.landmark.is_empty() {
        parts.push(format!("Near {}", address.landmark));
    }
    if !address.city.is_empty() {
        parts.push(address.city.clone());
    }
    if !address.state.is_empty() {
        parts.push(address.state.clone());
    }
    if !address.pincode.is_empty() {
        parts.push(address.pincode.clone());
    }

    if parts.is_empty() {
        ADDRESS_UNAVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_address() {
        assert_eq!(format_delivery_address(None), ADDRESS_UNAVAILABLE);
        assert_eq!(
            format_delivery_address(Some(&DeliveryAddress::default())),
            ADDRESS_UNAVAILABLE
        );
    }

    #[test]
    fn test_formatted_field_wins() {
        let address = DeliveryAddress {
            formatted: "14 MG Road, Pune 411001".to_string(),
            city: "Mumbai".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_delivery_address(Some(&address)),
            "14 MG Road, Pune 411001"
        );
    }

    #[test]
    fn test_components_joined_in_order() {
        let address = DeliveryAddress {
            street: "14 MG Road".to_string(),
            landmark: "City Mall".to_string(),
            city: "Pune".to_string(),
            pincode: "411001".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_delivery_address(Some(&address)),
            "14 MG Road, Near City Mall, Pune, 411001"
        );
    }
}
