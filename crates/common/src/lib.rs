//! Pieces shared by every crate in the workspace: wire types that are not
//! owned by a single domain, and process-wide tracing setup.

pub mod types;

pub mod utils {
    pub mod logging;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn liveness_banner_names_the_service() {
        assert!(types::LIVENESS_MESSAGE.contains("Car Doctor"));
    }
}
