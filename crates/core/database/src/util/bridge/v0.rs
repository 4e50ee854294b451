use wardlens_models::v0::*;

impl From<crate::Report> for Report {
    fn from(value: crate::Report) -> Self {
        Report {
            id: value.id,
            user_id: value.user_id,
            description: value.description,
            image_url: value.image_url,
            latitude: value.latitude,
            longitude: value.longitude,
            address: value.address,
            ward: value.ward,
            urgency: value.urgency,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
            timestamp: value.timestamp,
        }
    }
}
