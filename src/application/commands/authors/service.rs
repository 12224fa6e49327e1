use std::sync::Arc;

use crate::domain::author::AuthorRepository;

pub struct AuthorCommandService {
    pub(super) repo: Arc<dyn AuthorRepository>,
}

impl AuthorCommandService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }
}
