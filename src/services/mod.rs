pub mod details_service;
pub mod fallback;
pub mod generation_service;
pub mod guide_service;
pub mod identity_service;
pub mod prompts;
pub mod search_service;

#[cfg(test)]
pub mod test_support;
