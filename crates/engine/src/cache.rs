use crate::error::EngineError;
use crate::Orchestrator;
use core_types::StrategicReport;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct CachedReport {
    fingerprint: u64,
    stored_at: Instant,
    report: Arc<StrategicReport>,
}

/// Memoises the latest report in front of an `Orchestrator`.
///
/// Entries are keyed by a hash of every input series and expire after `ttl`.
/// A zero `ttl` turns the cache off. Failed runs are never stored.
pub struct CachedAnalysis {
    orchestrator: Orchestrator,
    ttl: Duration,
    slot: RwLock<Option<CachedReport>>,
}

impl CachedAnalysis {
    pub fn new(orchestrator: Orchestrator, ttl: Duration) -> Self {
        Self {
            orchestrator,
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a fresh-enough cached report, or runs the analysis and stores it.
    pub async fn report(&self) -> Result<Arc<StrategicReport>, EngineError> {
        if self.ttl.is_zero() {
            return Ok(Arc::new(self.orchestrator.run_full_analysis().await?));
        }

        let fingerprint = self.orchestrator.fingerprint();
        {
            let slot = self.slot.read().await;
            if let Some(cached) = slot.as_ref() {
                if cached.fingerprint == fingerprint && cached.stored_at.elapsed() < self.ttl {
                    tracing::debug!(
                        age_ms = cached.stored_at.elapsed().as_millis() as u64,
                        "Serving cached report."
                    );
                    return Ok(Arc::clone(&cached.report));
                }
            }
        }

        let report = Arc::new(self.orchestrator.run_full_analysis().await?);
        *self.slot.write().await = Some(CachedReport {
            fingerprint,
            stored_at: Instant::now(),
            report: Arc::clone(&report),
        });
        Ok(report)
    }

    /// Drops the stored report so the next call recomputes.
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer::{AnalyzerError, CategoryAnalyzer, QuadrantAnalyzer};
    use core_types::{AnalysisResult, Category, TimeSeries};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAnalyzer {
        inner: QuadrantAnalyzer,
        calls: Arc<AtomicUsize>,
    }

    impl CategoryAnalyzer for CountingAnalyzer {
        fn category(&self) -> Category {
            self.inner.category()
        }

        fn analyze(&self) -> Result<Vec<AnalysisResult>, AnalyzerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.analyze()
        }

        fn series(&self) -> Vec<(&str, &TimeSeries)> {
            self.inner.series()
        }
    }

    fn counted_orchestrator() -> (Orchestrator, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = CountingAnalyzer {
            inner: analyzer::baseline(Category::Strengths).unwrap(),
            calls: Arc::clone(&calls),
        };
        let orchestrator = Orchestrator::baseline()
            .unwrap()
            .with_analyzer(Arc::new(counting));
        (orchestrator, calls)
    }

    #[tokio::test]
    async fn fresh_entry_is_reused() {
        let (orchestrator, calls) = counted_orchestrator();
        let cache = CachedAnalysis::new(orchestrator, Duration::from_secs(300));

        let first = cache.report().await.unwrap();
        let second = cache.report().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.invalidate().await;
        let third = cache.report().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(first.summary, third.summary);
    }

    #[tokio::test]
    async fn zero_ttl_always_recomputes() {
        let (orchestrator, calls) = counted_orchestrator();
        let cache = CachedAnalysis::new(orchestrator, Duration::ZERO);

        cache.report().await.unwrap();
        cache.report().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn expired_entry_is_recomputed() {
        let (orchestrator, calls) = counted_orchestrator();
        let cache = CachedAnalysis::new(orchestrator, Duration::from_millis(20));

        cache.report().await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.report().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
