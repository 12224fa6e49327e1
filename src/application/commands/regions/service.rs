use std::sync::Arc;

use crate::domain::region::RegionRepository;

pub struct RegionCommandService {
    pub(super) repo: Arc<dyn RegionRepository>,
}

impl RegionCommandService {
    pub fn new(repo: Arc<dyn RegionRepository>) -> Self {
        Self { repo }
    }
}
