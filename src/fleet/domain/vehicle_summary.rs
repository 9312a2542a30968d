/// VehicleSummary value object: one row of the per-model sales overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSummary {
    id: u64,
    model: String,
    total_sales: u64,
    connected: u64,
    software_updates: u64,
    image: String,
}

impl VehicleSummary {
    /// Creates a summary, keeping only the file name of `image_ref`
    ///
    /// The backend serves image references as paths (`/img/ranger.png`);
    /// assets are resolved locally by file name.
    pub fn new(
        id: u64,
        model: String,
        total_sales: u64,
        connected: u64,
        software_updates: u64,
        image_ref: &str,
    ) -> Self {
        Self {
            id,
            model,
            total_sales,
            connected,
            software_updates,
            image: image_file_name(image_ref),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn total_sales(&self) -> u64 {
        self.total_sales
    }

    pub fn connected(&self) -> u64 {
        self.connected
    }

    pub fn software_updates(&self) -> u64 {
        self.software_updates
    }

    /// Image file name (may be empty when the backend sent none)
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Case-insensitive exact model comparison
    pub fn has_model(&self, model: &str) -> bool {
        self.model.to_lowercase() == model.to_lowercase()
    }
}

fn image_file_name(image_ref: &str) -> String {
    image_ref.rsplit('/').next().unwrap_or("").to_string()
}
