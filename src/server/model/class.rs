//! Class offering domain models and parameters.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::class::{ClassDto, UpdateClassDto},
    server::error::{internal::InternalError, AppError},
};

/// Review status of a class offering. Only approved classes are publicly listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            other => Err(AppError::BadRequest(format!(
                "Unknown class status '{}'",
                other
            ))),
        }
    }
}

/// Class offered by an instructor, with its seat accounting.
///
/// `available_seats` never drops below zero and moves in lockstep with `enrolled`:
/// each confirmed enrollment takes exactly one seat from the former and adds one to
/// the latter.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassOffering {
    pub id: i32,
    pub title: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub total_seats: i32,
    pub available_seats: i32,
    pub enrolled: i32,
    pub status: ClassStatus,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClassOffering {
    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            instructor_name: self.instructor_name,
            instructor_email: self.instructor_email,
            price: self.price,
            total_seats: self.total_seats,
            available_seats: self.available_seats,
            enrolled: self.enrolled,
            status: self.status.to_string(),
            feedback: self.feedback,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a class domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ClassOffering)` - The converted class
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored status is unknown
    pub fn from_entity(entity: entity::class_offering::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<ClassStatus>()
            .map_err(|_| InternalError::InvalidStoredValue {
                column: "class_offering.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            image_url: entity.image_url,
            instructor_name: entity.instructor_name,
            instructor_email: entity.instructor_email,
            price: entity.price,
            total_seats: entity.total_seats,
            available_seats: entity.available_seats,
            enrolled: entity.enrolled,
            status,
            feedback: entity.feedback,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a class. New classes start `pending` with every seat free.
#[derive(Debug, Clone)]
pub struct CreateClassParam {
    pub title: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub total_seats: i32,
}

/// Partial update of a class; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateClassParam {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub total_seats: Option<i32>,
}

impl UpdateClassParam {
    pub fn from_dto(dto: UpdateClassDto) -> Self {
        Self {
            title: dto.title,
            image_url: dto.image_url,
            price: dto.price,
            total_seats: dto.total_seats,
        }
    }
}

/// Ordering applied to class listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassSort {
    /// Most recently created first.
    #[default]
    Newest,
    /// Highest enrolled count first.
    Popular,
}

impl FromStr for ClassSort {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "newest" => Ok(Self::Newest),
            "popular" => Ok(Self::Popular),
            other => Err(AppError::BadRequest(format!("Unknown sort '{}'", other))),
        }
    }
}

/// Filter, ordering, and cap for a class listing.
#[derive(Debug, Clone, Default)]
pub struct ListClassesParam {
    /// Only return `approved` classes.
    pub approved_only: bool,
    pub sort: ClassSort,
    pub limit: Option<u64>,
}
