#[cfg(test)]
mod tests {
    use crate::errors::{Error, ResolutionError, Result};
    use crate::hierarchy::{
        Circle, District, HierarchyLevel, HierarchySelection, HierarchyServiceTrait,
        LandCategory, LevelState, LoadOutcome, LocationHierarchyService, Lot,
        MasterDataRepositoryTrait, Mouza, Village,
    };
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // --- Mock MasterDataRepository ---
    #[derive(Default)]
    struct MockMasterDataRepository {
        fail_districts: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockMasterDataRepository {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn circle(code: &str, district_code: &str, is_active: bool) -> Circle {
        Circle {
            code: code.to_string(),
            name: format!("Circle {}", code),
            district_code: district_code.to_string(),
            is_active,
        }
    }

    #[async_trait]
    impl MasterDataRepositoryTrait for MockMasterDataRepository {
        async fn list_districts(&self) -> Result<Vec<District>> {
            self.calls.lock().unwrap().push("districts".to_string());
            if self.fail_districts {
                return Err(Error::Repository("connection refused".to_string()));
            }
            Ok(vec![
                District {
                    code: "D01".to_string(),
                    name: "Kamrup".to_string(),
                    is_active: true,
                },
                District {
                    code: "D09".to_string(),
                    name: "Retired".to_string(),
                    is_active: false,
                },
            ])
        }

        async fn list_circles(&self, district_code: &str) -> Result<Vec<Circle>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("circles:{}", district_code));
            // The first district answers slowly so its response arrives last.
            let delay = if district_code == "D01" { 200 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![
                circle(&format!("{}-C1", district_code), district_code, true),
                circle(&format!("{}-C2", district_code), district_code, false),
            ])
        }

        async fn list_mouzas(&self, district_code: &str, circle_code: &str) -> Result<Vec<Mouza>> {
            Ok(vec![Mouza {
                code: "M01".to_string(),
                name: "Mouza 1".to_string(),
                district_code: district_code.to_string(),
                circle_code: circle_code.to_string(),
                base_price_mouza: Some(dec!(100000)),
                is_active: true,
            }])
        }

        async fn list_lots(&self, district_code: &str, circle_code: &str) -> Result<Vec<Lot>> {
            Ok(vec![Lot {
                code: "L01".to_string(),
                name: "Lot 1".to_string(),
                district_code: district_code.to_string(),
                circle_code: circle_code.to_string(),
                base_price_increase_lot: None,
                is_active: true,
            }])
        }

        async fn list_villages(
            &self,
            district_code: &str,
            circle_code: &str,
            mouza_code: &str,
            lot_code: Option<&str>,
        ) -> Result<Vec<Village>> {
            self.calls.lock().unwrap().push(format!(
                "villages:{}/{}/{}/{}",
                district_code,
                circle_code,
                mouza_code,
                lot_code.unwrap_or("-")
            ));
            Ok(vec![Village {
                code: "V01".to_string(),
                name: "Village 1".to_string(),
                district_code: district_code.to_string(),
                circle_code: circle_code.to_string(),
                mouza_code: mouza_code.to_string(),
                lot_code: lot_code.map(str::to_string),
                is_active: true,
            }])
        }

        async fn list_land_categories(&self) -> Result<Vec<LandCategory>> {
            Ok(vec![
                LandCategory {
                    id: "agri".to_string(),
                    name: "Agricultural".to_string(),
                    base_price_mouza_increase: dec!(5),
                    is_active: true,
                },
                LandCategory {
                    id: "old".to_string(),
                    name: "Discontinued".to_string(),
                    base_price_mouza_increase: dec!(0),
                    is_active: false,
                },
            ])
        }
    }

    fn service_with(
        repository: Arc<MockMasterDataRepository>,
        timeout: Duration,
    ) -> LocationHierarchyService {
        LocationHierarchyService::new(repository, timeout)
    }

    #[tokio::test]
    async fn test_inactive_units_are_filtered_out() {
        let service = service_with(Arc::default(), Duration::from_secs(5));

        let districts = service.get_districts().await.unwrap();
        let categories = service.get_land_categories().await.unwrap();

        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].code, "D01");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "agri");
    }

    #[tokio::test]
    async fn test_missing_parent_returns_empty_without_lookup() {
        let repository = Arc::new(MockMasterDataRepository::default());
        let service = service_with(repository.clone(), Duration::from_secs(5));

        assert!(service.get_circles(None).await.unwrap().is_empty());
        assert!(service.get_mouzas(Some("D01"), None).await.unwrap().is_empty());
        assert!(service
            .get_villages(Some("D01"), Some("C01"), None, Some("L01"))
            .await
            .unwrap()
            .is_empty());
        assert!(repository.calls().is_empty());
    }

    #[tokio::test]
    async fn test_villages_are_looked_up_by_full_path() {
        let repository = Arc::new(MockMasterDataRepository::default());
        let service = service_with(repository.clone(), Duration::from_secs(5));

        let villages = service
            .get_villages(Some("D01"), Some("C01"), Some("M01"), Some("L01"))
            .await
            .unwrap();

        assert_eq!(villages.len(), 1);
        assert_eq!(repository.calls(), vec!["villages:D01/C01/M01/L01"]);
    }

    #[tokio::test]
    async fn test_collaborator_failure_becomes_lookup_failed() {
        let repository = Arc::new(MockMasterDataRepository {
            fail_districts: true,
            ..Default::default()
        });
        let service = service_with(repository, Duration::from_secs(5));

        let err = service.get_districts().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Resolution(ResolutionError::LookupFailed { ref what, .. }) if what == "districts"
        ));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_refresh_applies_active_options() {
        let service = service_with(Arc::default(), Duration::from_secs(5));
        let selection = Mutex::new(HierarchySelection::new());
        selection
            .lock()
            .unwrap()
            .select(HierarchyLevel::District, "D02")
            .unwrap();

        let outcome = service
            .refresh_options(&selection, HierarchyLevel::Circle)
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Applied);
        let state = selection.lock().unwrap().state(HierarchyLevel::Circle);
        let codes: Vec<String> = state.options().iter().map(|o| o.code.clone()).collect();
        assert_eq!(codes, vec!["D02-C1".to_string()]);
    }

    #[tokio::test]
    async fn test_late_response_for_old_district_is_discarded() {
        let service = service_with(Arc::default(), Duration::from_secs(5));
        let selection = Mutex::new(HierarchySelection::new());
        selection
            .lock()
            .unwrap()
            .select(HierarchyLevel::District, "D01")
            .unwrap();

        let (slow, fast) = tokio::join!(
            service.refresh_options(&selection, HierarchyLevel::Circle),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                selection
                    .lock()
                    .unwrap()
                    .select(HierarchyLevel::District, "D02")
                    .unwrap();
                service
                    .refresh_options(&selection, HierarchyLevel::Circle)
                    .await
            }
        );

        assert_eq!(slow.unwrap(), LoadOutcome::Stale);
        assert_eq!(fast.unwrap(), LoadOutcome::Applied);
        let state = selection.lock().unwrap().state(HierarchyLevel::Circle);
        assert_eq!(state.options()[0].code, "D02-C1");
    }

    #[tokio::test]
    async fn test_refresh_timeout_leaves_failed_state() {
        let service = service_with(Arc::default(), Duration::from_millis(50));
        let selection = Mutex::new(HierarchySelection::new());
        selection
            .lock()
            .unwrap()
            .select(HierarchyLevel::District, "D01")
            .unwrap();

        let err = service
            .refresh_options(&selection, HierarchyLevel::Circle)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Resolution(ResolutionError::Timeout { .. })
        ));
        assert!(matches!(
            selection.lock().unwrap().state(HierarchyLevel::Circle),
            LevelState::Failed { .. }
        ));
    }
}
