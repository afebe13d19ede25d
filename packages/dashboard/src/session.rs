//! Reload sequencing for the dashboard.
//!
//! Several triggers can issue reloads close together: a warning click while
//! a form submission is still in flight, a second focus click before the
//! first answer lands. Responses may arrive out of order, so every reload is
//! tagged with a generation number when it is issued, and a response is
//! applied only if no newer reload has been issued by the time it arrives.
//! In-flight requests are never cancelled; stale ones simply cannot land.

use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

use weather_map_client::{DashboardGateway, GatewayError};
use weather_map_dashboard_models::LocationQuery;

use crate::state::DashboardState;

/// How a finished reload was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The response was the newest issued and replaced the snapshot.
    Applied,
    /// A newer reload was issued while this one was in flight; its
    /// response was discarded.
    Stale,
}

/// One dashboard instance: state, its gateway, and reload sequencing.
pub struct DashboardSession {
    gateway: Arc<dyn DashboardGateway>,
    state: Mutex<DashboardState>,
    generation: AtomicU64,
}

impl DashboardSession {
    #[must_use]
    pub fn new(gateway: Arc<dyn DashboardGateway>, state: DashboardState) -> Self {
        Self {
            gateway,
            state: Mutex::new(state),
            generation: AtomicU64::new(0),
        }
    }

    /// Fetches a snapshot for `query` and applies it, unless a newer reload
    /// was issued while this one was in flight.
    ///
    /// The staleness check happens under the state lock at apply time, so
    /// two responses can never install out of order.
    ///
    /// # Errors
    ///
    /// * If the fetch failed and no newer reload superseded it. A stale
    ///   failure is discarded like a stale success and reported as
    ///   [`ReloadOutcome::Stale`].
    ///
    /// # Panics
    ///
    /// * If the state mutex is poisoned.
    pub async fn reload(&self, query: LocationQuery) -> Result<ReloadOutcome, GatewayError> {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!(
            "Reload {issued} issued for ({}, {})",
            query.lat,
            query.lon
        );

        let fetched = self.gateway.fetch_dashboard(&query).await;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != issued {
            log::debug!("Reload {issued} superseded; response discarded");
            return Ok(ReloadOutcome::Stale);
        }
        let snapshot = fetched?;
        state.apply_snapshot(snapshot);
        Ok(ReloadOutcome::Applied)
    }

    /// Reloads with the location exactly as the form currently holds it.
    ///
    /// # Errors
    ///
    /// * If the underlying [`Self::reload`] fails.
    ///
    /// # Panics
    ///
    /// * If the state mutex is poisoned.
    pub async fn reload_current(&self) -> Result<ReloadOutcome, GatewayError> {
        let query = self.lock_state().submit();
        self.reload(query).await
    }

    /// Reads from the state under the lock.
    ///
    /// # Panics
    ///
    /// * If the state mutex is poisoned.
    pub fn with_state<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        f(&self.lock_state())
    }

    /// Mutates the state under the lock.
    ///
    /// # Panics
    ///
    /// * If the state mutex is poisoned.
    pub fn update<T>(&self, f: impl FnOnce(&mut DashboardState) -> T) -> T {
        f(&mut self.lock_state())
    }

    fn lock_state(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().expect("dashboard state mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use tokio::sync::oneshot;
    use weather_map_client::StatusCode;
    use weather_map_dashboard_models::DashboardSnapshot;
    use weather_map_geography::BoundaryDataset;
    use weather_map_map::{MapClick, MapSeries, PixelPoint};

    use super::*;
    use crate::state::{MapClickOutcome, default_location};

    fn snapshot_for(province: &str) -> DashboardSnapshot {
        DashboardSnapshot {
            current_province: Some(province.to_string()),
            provinces: vec![],
            warnings: vec![],
            forecast_points: vec![],
            last_refresh_at: None,
            refresh_interval_minutes: 30,
        }
    }

    fn fresh_state() -> DashboardState {
        DashboardState::new(BoundaryDataset::builtin()).unwrap()
    }

    fn current_province(session: &DashboardSession) -> Option<String> {
        session.with_state(|state| {
            state
                .snapshot()
                .and_then(|snapshot| snapshot.current_province.clone())
        })
    }

    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DashboardGateway for CountingGateway {
        async fn fetch_dashboard(
            &self,
            _query: &LocationQuery,
        ) -> Result<DashboardSnapshot, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(snapshot_for("浙江"))
        }
    }

    /// First call parks on the gate and answers 四川; later calls answer
    /// 浙江 immediately.
    struct GatedGateway {
        calls: AtomicUsize,
        gate: Mutex<Option<oneshot::Receiver<()>>>,
        first_fails: bool,
    }

    impl GatedGateway {
        fn new(gate: oneshot::Receiver<()>, first_fails: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                gate: Mutex::new(Some(gate)),
                first_fails,
            }
        }
    }

    #[async_trait]
    impl DashboardGateway for GatedGateway {
        async fn fetch_dashboard(
            &self,
            _query: &LocationQuery,
        ) -> Result<DashboardSnapshot, GatewayError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call > 0 {
                return Ok(snapshot_for("浙江"));
            }

            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.first_fails {
                return Err(GatewayError::Status {
                    status: StatusCode::BAD_GATEWAY,
                    body: "upstream down".to_string(),
                });
            }
            Ok(snapshot_for("四川"))
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl DashboardGateway for FailingGateway {
        async fn fetch_dashboard(
            &self,
            _query: &LocationQuery,
        ) -> Result<DashboardSnapshot, GatewayError> {
            Err(GatewayError::Status {
                status: StatusCode::BAD_GATEWAY,
                body: "upstream down".to_string(),
            })
        }
    }

    struct RecordingGateway {
        last: Mutex<Option<LocationQuery>>,
    }

    #[async_trait]
    impl DashboardGateway for RecordingGateway {
        async fn fetch_dashboard(
            &self,
            query: &LocationQuery,
        ) -> Result<DashboardSnapshot, GatewayError> {
            *self.last.lock().unwrap() = Some(query.clone());
            Ok(snapshot_for("浙江"))
        }
    }

    #[tokio::test]
    async fn applies_a_fresh_response() {
        let session = DashboardSession::new(
            Arc::new(CountingGateway {
                calls: AtomicUsize::new(0),
            }),
            fresh_state(),
        );

        let outcome = session.reload(default_location()).await.unwrap();

        assert_eq!(outcome, ReloadOutcome::Applied);
        assert_eq!(current_province(&session).as_deref(), Some("浙江"));
    }

    #[tokio::test]
    async fn newest_issued_reload_wins_regardless_of_arrival_order() {
        let (release, gate) = oneshot::channel();
        let gateway = Arc::new(GatedGateway::new(gate, false));
        let session = Arc::new(DashboardSession::new(gateway, fresh_state()));

        let slow = tokio::spawn({
            let session = Arc::clone(&session);
            async move { session.reload(default_location()).await }
        });
        // Let the first reload issue its generation and park on the gate.
        tokio::task::yield_now().await;

        let fast = session.reload(default_location()).await.unwrap();
        assert_eq!(fast, ReloadOutcome::Applied);

        release.send(()).unwrap();
        let slow = slow.await.unwrap().unwrap();
        assert_eq!(slow, ReloadOutcome::Stale);

        assert_eq!(current_province(&session).as_deref(), Some("浙江"));
    }

    #[tokio::test]
    async fn stale_failure_is_discarded_quietly() {
        let (release, gate) = oneshot::channel();
        let gateway = Arc::new(GatedGateway::new(gate, true));
        let session = Arc::new(DashboardSession::new(gateway, fresh_state()));

        let slow = tokio::spawn({
            let session = Arc::clone(&session);
            async move { session.reload(default_location()).await }
        });
        tokio::task::yield_now().await;

        session.reload(default_location()).await.unwrap();
        release.send(()).unwrap();

        let slow = slow.await.unwrap().unwrap();
        assert_eq!(slow, ReloadOutcome::Stale);
        assert_eq!(current_province(&session).as_deref(), Some("浙江"));
    }

    #[tokio::test]
    async fn fresh_failure_surfaces_and_keeps_the_snapshot() {
        let session = DashboardSession::new(Arc::new(FailingGateway), fresh_state());
        session.update(|state| state.apply_snapshot(snapshot_for("四川")));

        let err = session.reload(default_location()).await.unwrap_err();

        assert!(matches!(err, GatewayError::Status { .. }));
        assert_eq!(current_province(&session).as_deref(), Some("四川"));
    }

    #[tokio::test]
    async fn reload_current_uses_the_form_location() {
        let gateway = Arc::new(RecordingGateway {
            last: Mutex::new(None),
        });
        let session = DashboardSession::new(gateway.clone(), fresh_state());
        session.update(|state| {
            state.edit_form(crate::state::FormPatch {
                lat: Some(30.5928),
                lon: Some(114.3055),
                province: Some("湖北".to_string()),
                ..crate::state::FormPatch::default()
            });
        });

        session.reload_current().await.unwrap();

        let sent = gateway.last.lock().unwrap().clone().unwrap();
        assert!((sent.lat - 30.5928).abs() < f64::EPSILON);
        assert_eq!(sent.province.as_deref(), Some("湖北"));
    }

    #[tokio::test]
    async fn focus_click_drives_exactly_one_reload() {
        let gateway = Arc::new(CountingGateway {
            calls: AtomicUsize::new(0),
        });
        let session = DashboardSession::new(gateway.clone(), fresh_state());

        let outcome = session.update(|state| {
            state.click_map(
                &MapClick {
                    series: MapSeries::Main,
                    region: Some("新疆维吾尔自治区".to_string()),
                    pixel: PixelPoint::new(120.0, 80.0),
                },
                None,
            )
        });

        let MapClickOutcome::Focused { query, .. } = outcome else {
            panic!("expected a focus outcome, got {outcome:?}");
        };
        session.reload(query).await.unwrap();

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }
}
