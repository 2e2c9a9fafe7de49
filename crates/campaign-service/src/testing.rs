//! In-memory implementation of the repository and unit-of-work ports
//!
//! A unit of work snapshots the store on `begin`, works on the copy, and
//! writes it back on `commit`. Dropping it discards the copy.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use campaign_common::JwtService;
use campaign_core::entities::{
    Campaign, CampaignStatus, QueueCursor, Reaction, ReactionStats,
};
use campaign_core::error::DomainError;
use campaign_core::traits::{
    CampaignRepository, ReactionRepository, RepoResult, UnitOfWork, UnitOfWorkFactory,
};

use crate::services::ServiceContext;

#[derive(Debug, Clone, Default)]
struct State {
    campaigns: HashMap<Uuid, Campaign>,
    reactions: BTreeMap<(Uuid, String), Reaction>,
}

impl State {
    fn active(&self, id: Uuid) -> Option<&Campaign> {
        self.campaigns.get(&id).filter(|c| c.is_active())
    }

    fn stats(&self, campaign_id: Uuid) -> ReactionStats {
        let mut stats = ReactionStats::default();
        for reaction in self.reactions.values().filter(|r| r.campaign_id == campaign_id) {
            stats.record(reaction.reaction_type);
        }
        stats
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
    commit_failures: Arc<Mutex<VecDeque<DomainError>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service context backed by this store
    pub fn context(&self) -> ServiceContext {
        let store = Arc::new(self.clone());
        ServiceContext::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(JwtService::new("test-secret", 900)),
        )
    }

    pub async fn seed_campaign(&self, title: &str) -> Campaign {
        let campaign = Campaign::new(title.to_string(), CampaignStatus::Published);
        self.state
            .lock()
            .await
            .campaigns
            .insert(campaign.id, campaign.clone());
        campaign
    }

    /// Raw campaign row, including soft-deleted ones
    pub async fn campaign(&self, id: Uuid) -> Option<Campaign> {
        self.state.lock().await.campaigns.get(&id).cloned()
    }

    pub async fn reaction_rows(&self, campaign_id: Uuid) -> usize {
        self.state
            .lock()
            .await
            .reactions
            .values()
            .filter(|r| r.campaign_id == campaign_id)
            .count()
    }

    /// Make the next commit fail with `err` and discard its writes
    pub async fn fail_next_commit(&self, err: DomainError) {
        self.commit_failures.lock().await.push_back(err);
    }
}

#[async_trait]
impl CampaignRepository for MemoryStore {
    async fn find_active(&self, id: Uuid) -> RepoResult<Option<Campaign>> {
        Ok(self.state.lock().await.active(id).cloned())
    }

    async fn find_needing_verification(
        &self,
        before: Option<QueueCursor>,
        limit: i64,
    ) -> RepoResult<Vec<Campaign>> {
        let state = self.state.lock().await;
        let mut flagged: Vec<Campaign> = state
            .campaigns
            .values()
            .filter(|c| c.is_active() && c.needs_verification)
            .filter(|c| before.is_none_or(|cursor| QueueCursor::of(c) < cursor))
            .cloned()
            .collect();
        flagged.sort_by_key(|c| std::cmp::Reverse(QueueCursor::of(c)));
        flagged.truncate(usize::try_from(limit.max(1)).unwrap_or(usize::MAX));
        Ok(flagged)
    }

    async fn create(&self, campaign: &Campaign) -> RepoResult<()> {
        self.state
            .lock()
            .await
            .campaigns
            .insert(campaign.id, campaign.clone());
        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> RepoResult<bool> {
        let mut state = self.state.lock().await;
        match state.campaigns.get_mut(&id) {
            Some(campaign) if campaign.is_active() => {
                campaign.deleted_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn clear_verification_flag(&self, id: Uuid) -> RepoResult<bool> {
        let mut state = self.state.lock().await;
        match state.campaigns.get_mut(&id) {
            Some(campaign) if campaign.is_active() && campaign.needs_verification => {
                campaign.needs_verification = false;
                campaign.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find(&self, campaign_id: Uuid, user_id: &str) -> RepoResult<Option<Reaction>> {
        let state = self.state.lock().await;
        Ok(state
            .reactions
            .get(&(campaign_id, user_id.to_string()))
            .cloned())
    }

    async fn find_by_campaign(&self, campaign_id: Uuid) -> RepoResult<Vec<Reaction>> {
        let state = self.state.lock().await;
        let mut reactions: Vec<Reaction> = state
            .reactions
            .values()
            .filter(|r| r.campaign_id == campaign_id)
            .cloned()
            .collect();
        reactions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(reactions)
    }

    async fn count_by_type(&self, campaign_id: Uuid) -> RepoResult<ReactionStats> {
        Ok(self.state.lock().await.stats(campaign_id))
    }

    async fn count_by_type_many(
        &self,
        campaign_ids: &[Uuid],
    ) -> RepoResult<HashMap<Uuid, ReactionStats>> {
        let state = self.state.lock().await;
        Ok(campaign_ids
            .iter()
            .map(|&id| (id, state.stats(id)))
            .filter(|(_, stats)| !stats.is_empty())
            .collect())
    }
}

#[async_trait]
impl UnitOfWorkFactory for MemoryStore {
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let working = self.state.lock().await.clone();
        Ok(Box::new(MemoryUnitOfWork {
            store: self.clone(),
            working,
        }))
    }
}

struct MemoryUnitOfWork {
    store: MemoryStore,
    working: State,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn lock_active_campaign(&mut self, id: Uuid) -> RepoResult<Option<Campaign>> {
        Ok(self.working.active(id).cloned())
    }

    async fn upsert_reaction(&mut self, reaction: &Reaction) -> RepoResult<Reaction> {
        let key = (reaction.campaign_id, reaction.user_id.clone());
        let stored = match self.working.reactions.get(&key) {
            Some(existing) => Reaction {
                reaction_type: reaction.reaction_type,
                updated_at: reaction.updated_at,
                ..existing.clone()
            },
            None => reaction.clone(),
        };
        self.working.reactions.insert(key, stored.clone());
        Ok(stored)
    }

    async fn delete_reaction(&mut self, campaign_id: Uuid, user_id: &str) -> RepoResult<bool> {
        Ok(self
            .working
            .reactions
            .remove(&(campaign_id, user_id.to_string()))
            .is_some())
    }

    async fn reaction_stats(&mut self, campaign_id: Uuid) -> RepoResult<ReactionStats> {
        Ok(self.working.stats(campaign_id))
    }

    async fn set_needs_verification(&mut self, campaign_id: Uuid, flag: bool) -> RepoResult<bool> {
        match self.working.campaigns.get_mut(&campaign_id) {
            Some(campaign) if campaign.needs_verification != flag => {
                campaign.needs_verification = flag;
                campaign.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let MemoryUnitOfWork { store, working } = *self;
        let failure = store.commit_failures.lock().await.pop_front();
        if let Some(err) = failure {
            return Err(err);
        }
        *store.state.lock().await = working;
        Ok(())
    }
}
