use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassDto {
    pub id: i32,
    pub title: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub total_seats: i32,
    pub available_seats: i32,
    pub enrolled: i32,
    pub status: String,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateClassDto {
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price: f64,
    pub total_seats: i32,
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UpdateClassDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub total_seats: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FeedbackDto {
    pub feedback: String,
}
