//! Booking repository implementation.

use sqlx::PgPool;

use bunkhub_core::error::{AppError, ErrorKind};
use bunkhub_core::result::AppResult;
use bunkhub_core::types::id::{BookingId, EventId, UserId};
use bunkhub_core::types::pagination::{PageRequest, PageResponse};
use bunkhub_entity::booking::{
    Booking, BookingPerson, BookingStatus, BookingWithPeople, CreateBooking, UpdateBooking,
};

/// Filters applied when listing bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Restrict to one event.
    pub event_id: Option<EventId>,
    /// Restrict to one workflow status.
    pub status: Option<BookingStatus>,
    /// Restrict to one requester.
    pub requester_id: Option<UserId>,
}

/// Repository for bookings and their rosters.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a booking together with its roster in one transaction.
    ///
    /// People are stored with their submitted order as `person_index`;
    /// allocations later key on that index.
    pub async fn create(&self, booking: &CreateBooking) -> AppResult<BookingWithPeople> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
                (event_id, requester_id, status, stay_from, stay_to, contact_phone, note) \
             VALUES ($1, $2, 'pending', $3, $4, $5, $6) RETURNING *",
        )
        .bind(booking.event_id)
        .bind(booking.requester_id)
        .bind(booking.stay_from)
        .bind(booking.stay_to)
        .bind(&booking.contact_phone)
        .bind(&booking.note)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))?;

        let mut people = Vec::with_capacity(booking.people.len());
        for (index, person) in booking.people.iter().enumerate() {
            let row = sqlx::query_as::<_, BookingPerson>(
                "INSERT INTO booking_people \
                    (booking_id, person_index, name, age, gender, stay_from, stay_to) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
            )
            .bind(created.id)
            .bind(index as i32)
            .bind(&person.name)
            .bind(person.age)
            .bind(person.gender)
            .bind(person.stay_from)
            .bind(person.stay_to)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create booking person", e)
            })?;
            people.push(row);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        Ok(BookingWithPeople {
            booking: created,
            people,
        })
    }

    /// Find a booking by id.
    pub async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// Find a booking together with its roster.
    pub async fn find_with_people(&self, id: BookingId) -> AppResult<Option<BookingWithPeople>> {
        let Some(booking) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let people = self.list_people(id).await?;
        Ok(Some(BookingWithPeople { booking, people }))
    }

    /// The booking's roster, ordered by person index.
    pub async fn list_people(&self, id: BookingId) -> AppResult<Vec<BookingPerson>> {
        sqlx::query_as::<_, BookingPerson>(
            "SELECT * FROM booking_people WHERE booking_id = $1 ORDER BY person_index",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list booking people", e)
        })
    }

    /// List bookings matching the filter, newest first.
    pub async fn list(
        &self,
        filter: &BookingFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings \
             WHERE ($1::uuid IS NULL OR event_id = $1) \
               AND ($2::booking_status IS NULL OR status = $2) \
               AND ($3::uuid IS NULL OR requester_id = $3)",
        )
        .bind(filter.event_id)
        .bind(filter.status)
        .bind(filter.requester_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))?;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE ($1::uuid IS NULL OR event_id = $1) \
               AND ($2::booking_status IS NULL OR status = $2) \
               AND ($3::uuid IS NULL OR requester_id = $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(filter.event_id)
        .bind(filter.status)
        .bind(filter.requester_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update a pending booking's editable fields.
    pub async fn update(&self, id: BookingId, update: &UpdateBooking) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET \
                stay_from = COALESCE($2, stay_from), \
                stay_to = COALESCE($3, stay_to), \
                contact_phone = COALESCE($4, contact_phone), \
                note = COALESCE($5, note), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(update.stay_from)
        .bind(update.stay_to)
        .bind(&update.contact_phone)
        .bind(&update.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))
    }

    /// Set a booking's status, returning the updated row.
    ///
    /// Transition legality is the service's concern; this only persists.
    pub async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })
    }

    /// Booking counts per status for an event.
    pub async fn count_by_status(
        &self,
        event_id: EventId,
    ) -> AppResult<Vec<(BookingStatus, i64)>> {
        sqlx::query_as::<_, (BookingStatus, i64)>(
            "SELECT status, COUNT(*) FROM bookings WHERE event_id = $1 GROUP BY status",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))
    }
}
