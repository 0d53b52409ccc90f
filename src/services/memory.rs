use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{Campaign, Candidate, Customer, TargetingLocation};
use crate::services::repository::{CampaignRepository, CustomerRepository, RepositoryError, TargetingLocationRepository};

/// In-process store used for local runs and tests
///
/// Holds a fixed set of customers, targeting locations and campaigns. Reads hand out
/// copies, so callers can never mutate the stored records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    customers: Vec<Customer>,
    locations: Vec<TargetingLocation>,
    campaigns: Vec<Campaign>,
}

impl InMemoryRepository {
    pub fn new(customers: Vec<Customer>, locations: Vec<TargetingLocation>) -> Self {
        Self {
            customers,
            locations,
            campaigns: Vec::new(),
        }
    }

    pub fn with_campaigns(mut self, campaigns: Vec<Campaign>) -> Self {
        self.campaigns = campaigns;
        self
    }

    /// Ten customers spread around Gangnam, Sinchon, Samseong and City Hall,
    /// three targeting locations and one campaign around Gangnam Station
    pub fn with_sample_data() -> Self {
        Self::new(sample_customers(), sample_targeting_locations()).with_campaigns(sample_campaigns())
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository {
    async fn candidates(&self, company_id: Option<Uuid>) -> Result<Vec<Candidate>, RepositoryError> {
        let candidates: Vec<Candidate> = self
            .customers
            .iter()
            .filter(|c| company_id.is_none() || c.company_id == company_id)
            .filter_map(Customer::to_candidate)
            .collect();

        tracing::trace!("Memory store returned {} candidates", candidates.len());
        Ok(candidates)
    }

    async fn health_check(&self) -> Result<bool, RepositoryError> {
        Ok(true)
    }
}

#[async_trait]
impl TargetingLocationRepository for InMemoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TargetingLocation>, RepositoryError> {
        Ok(self.locations.iter().find(|l| l.id == id).cloned())
    }
}

#[async_trait]
impl CampaignRepository for InMemoryRepository {
    async fn find_campaign(&self, id: Uuid) -> Result<Option<Campaign>, RepositoryError> {
        Ok(self.campaigns.iter().find(|c| c.id == id).cloned())
    }
}

fn sample_customer(id: u32, name: &str, lat: f64, lng: f64) -> Customer {
    Customer {
        id: id.to_string(),
        company_id: None,
        name: name.to_string(),
        phone: None,
        lat: Some(lat),
        lng: Some(lng),
        dong_code: None,
    }
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        sample_customer(1, "김철수", 37.4980, 127.0276),
        sample_customer(2, "이영희", 37.5572, 126.9254),
        sample_customer(3, "박민수", 37.5172, 127.0473),
        sample_customer(4, "최지영", 37.5665, 126.9780),
        sample_customer(5, "정현우", 37.4968, 127.0278),
        sample_customer(6, "한소영", 37.5575, 126.9258),
        sample_customer(7, "윤태호", 37.5175, 127.0478),
        sample_customer(8, "임수진", 37.5668, 126.9785),
        sample_customer(9, "강동현", 37.4985, 127.0280),
        sample_customer(10, "조미영", 37.5578, 126.9260),
    ]
}

fn sample_location(n: u128, name: &str, lat: f64, lng: f64, radius_m: i32, memo: &str) -> TargetingLocation {
    TargetingLocation {
        id: Uuid::from_u128(n),
        company_id: None,
        name: name.to_string(),
        center_lat: lat,
        center_lng: lng,
        radius_m,
        memo: Some(memo.to_string()),
        created_at: Utc::now(),
    }
}

pub fn sample_targeting_locations() -> Vec<TargetingLocation> {
    vec![
        sample_location(1, "강남구 강남대로", 37.498, 127.0276, 2000, "강남역 주변 상권"),
        sample_location(2, "서초구 서초대로", 37.501, 127.0250, 1500, "서초역 주변 상권"),
        sample_location(3, "마포구 홍대로", 37.495, 127.0300, 1800, "홍대입구역 주변 상권"),
    ]
}

pub fn sample_campaigns() -> Vec<Campaign> {
    vec![Campaign {
        id: Uuid::from_u128(101),
        company_id: None,
        name: "강남역 오픈 이벤트".to_string(),
        message: "오픈 기념 전 메뉴 10% 할인".to_string(),
        lat: 37.498,
        lng: 127.0276,
        radius_m: 1000,
        targeting_location_id: Some(Uuid::from_u128(1)),
        scheduled_at: None,
        created_at: Utc::now(),
    }]
}
