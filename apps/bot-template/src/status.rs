use rand::seq::SliceRandom;
use rand::Rng;
use serenity::all::{ActivityData, Context};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

const PERIOD: Duration = Duration::from_secs(60);

/// Rotates the bot's presence through a fixed pool of texts.
#[derive(Debug, Clone)]
pub struct StatusRotator {
    pool: Vec<String>,
    period: Duration,
}

impl StatusRotator {
    pub fn new(pool: Vec<String>) -> Self {
        Self {
            pool,
            period: PERIOD,
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        match self.pool.as_slice() {
            [] => None,
            [only] => Some(only.as_str()),
            pool => pool.choose(rng).map(String::as_str),
        }
    }

    /// Update the presence now and then once per period, for the lifetime of the process.
    pub fn spawn(self, ctx: Context) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            loop {
                interval.tick().await;
                let status = self.pick(&mut rand::thread_rng()).map(str::to_owned);
                if let Some(status) = status {
                    debug!(status = %status, "Updating presence");
                    ctx.set_activity(Some(ActivityData::playing(status)));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_pool_picks_nothing() {
        let rotator = StatusRotator::new(Vec::new());
        assert_eq!(rotator.pick(&mut StdRng::seed_from_u64(1)), None);
    }

    #[test]
    fn single_entry_is_always_picked() {
        let rotator = StatusRotator::new(vec!["In Beta v0.1.0".into()]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(rotator.pick(&mut rng), Some("In Beta v0.1.0"));
        }
    }

    #[test]
    fn every_entry_is_eventually_picked() {
        let pool: Vec<String> = (0..5).map(|i| format!("status {i}")).collect();
        let rotator = StatusRotator::new(pool.clone());
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<&str> = (0..1000).filter_map(|_| rotator.pick(&mut rng)).collect();

        assert_eq!(seen.len(), pool.len());
    }
}
