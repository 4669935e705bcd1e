//! Fixed catalog of monitored Tamil Nadu districts

use rand::{rngs::StdRng, RngExt};

use crate::models::DistrictStatus;

/// Districts covered by the alert service, in catalog order
pub const DISTRICTS: [&str; 23] = [
    "Chennai",
    "Chengalpattu",
    "Kancheepuram",
    "Tiruvallur",
    "Villupuram",
    "Cuddalore",
    "Mayiladuthurai",
    "Nagapattinam",
    "Tiruvarur",
    "Thanjavur",
    "Pudukkottai",
    "Ramanathapuram",
    "Thoothukudi",
    "Tirunelveli",
    "Kanniyakumari",
    "Madurai",
    "Tiruchirappalli",
    "Salem",
    "Coimbatore",
    "Vellore",
    "Erode",
    "Dindigul",
    "Sivaganga",
];

/// The set of districts a deployment answers for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictCatalog {
    names: Vec<&'static str>,
}

impl DistrictCatalog {
    pub fn new(names: &[&'static str]) -> Self {
        let mut names = names.to_vec();
        names.sort_unstable();
        names.dedup();
        Self { names }
    }

    /// All districts in alphabetical order
    pub fn sorted(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a district by its exact catalog spelling
    pub fn find(&self, name: &str) -> Option<&'static str> {
        self.names.iter().copied().find(|district| *district == name)
    }
}

impl Default for DistrictCatalog {
    fn default() -> Self {
        Self::new(&DISTRICTS)
    }
}

/// Draw a district status uniformly
pub fn random_status(rng: &mut StdRng) -> DistrictStatus {
    DistrictStatus::ALL[rng.random_range(0..DistrictStatus::ALL.len())]
}
