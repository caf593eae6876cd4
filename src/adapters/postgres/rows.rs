//! Row decoding shared by the colony repositories.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::colony::{BreedingPair, Litter, Observation, Sex, Strain, WeanedGroup};
use crate::domain::foundation::{
    BreedingPairId, DomainError, ErrorCode, LitterId, ObservationId, Timestamp, WeanedGroupId,
};

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to read column {}", name), e))
}

fn count(row: &PgRow, name: &str) -> Result<u32, DomainError> {
    let value: i32 = column(row, name)?;
    u32::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Negative {} stored: {}", name, value),
        )
    })
}

fn strain(row: &PgRow) -> Result<Strain, DomainError> {
    let name: String = column(row, "strain")?;
    Strain::resolve(&name).map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))
}

pub(super) fn breeding_pair(row: &PgRow) -> Result<BreedingPair, DomainError> {
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    Ok(BreedingPair::reconstitute(
        BreedingPairId::from_uuid(column(row, "id")?),
        column(row, "cage_label")?,
        strain(row)?,
        column(row, "paired_on")?,
        count(row, "males")?,
        count(row, "females")?,
        Timestamp::from_datetime(created_at),
    ))
}

pub(super) fn litter(row: &PgRow) -> Result<Litter, DomainError> {
    Ok(Litter::reconstitute(
        LitterId::from_uuid(column(row, "id")?),
        BreedingPairId::from_uuid(column(row, "breeding_pair_id")?),
        column::<NaiveDate>(row, "born_on")?,
        column::<NaiveDate>(row, "weaning_on")?,
        count(row, "males")?,
        count(row, "females")?,
        column(row, "males_separated")?,
        column(row, "females_separated")?,
    ))
}

pub(super) fn weaned_group(row: &PgRow) -> Result<WeanedGroup, DomainError> {
    let sex: String = column(row, "sex")?;
    let sex: Sex = sex
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::DatabaseError, e))?;
    let pair_id: Option<Uuid> = column(row, "breeding_pair_id")?;
    let litter_id: Option<Uuid> = column(row, "litter_id")?;

    Ok(WeanedGroup::reconstitute(
        WeanedGroupId::from_uuid(column(row, "id")?),
        sex,
        column(row, "cage_label")?,
        strain(row)?,
        column(row, "born_on")?,
        column(row, "weaned_on")?,
        count(row, "head_count")?,
        column(row, "parents_label")?,
        pair_id.map(BreedingPairId::from_uuid),
        litter_id.map(LitterId::from_uuid),
    ))
}

pub(super) fn observation(row: &PgRow) -> Result<Observation, DomainError> {
    let recorded_at: DateTime<Utc> = column(row, "recorded_at")?;
    Ok(Observation::reconstitute(
        ObservationId::from_uuid(column(row, "id")?),
        WeanedGroupId::from_uuid(column(row, "weaned_group_id")?),
        column(row, "note")?,
        Timestamp::from_datetime(recorded_at),
    ))
}
