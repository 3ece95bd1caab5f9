use crate::{
    error::{AppError, AppResult},
    models::{CastPayload, MoviePayload, OscarPayload, PersonPayload},
};

pub const ACTING_NOMINATIONS: [&str; 4] = [
    "ACTOR IN A LEADING ROLE",
    "ACTRESS IN A LEADING ROLE",
    "ACTOR IN A SUPPORTING ROLE",
    "ACTRESS IN A SUPPORTING ROLE",
];

pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

const MAX_NAME_LEN: usize = 256;
const MAX_URL_LEN: usize = 512;

pub fn current_year() -> i32 {
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    i32::from(today.year())
}

pub fn normalize_nomination(nomination: &str) -> String {
    nomination.trim().to_uppercase()
}

pub fn rating(value: i64) -> AppResult<i16> {
    if !RATING_RANGE.contains(&value) {
        return Err(AppError::Validation(format!(
            "rating must be between {} and {}, got {value}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        )));
    }
    Ok(value as i16)
}

pub fn year_not_in_future(field: &str, year: i32, current_year: i32) -> AppResult<()> {
    if year > current_year {
        return Err(AppError::Validation(format!("{field} {year} is in the future")));
    }
    Ok(())
}

/// Rejects actors younger than `years` at `current_year`.
#[derive(Clone, Copy, Debug)]
pub struct MinAge {
    pub years: i32,
}

impl MinAge {
    pub fn check(&self, birth_year: i32, current_year: i32) -> AppResult<()> {
        let Some(age) = current_year.checked_sub(birth_year) else {
            return Err(AppError::Validation(format!("birth_year {birth_year} is out of range")));
        };
        if age < self.years {
            return Err(AppError::Validation(format!(
                "the actor is too young, only actors at least {} years old are allowed",
                self.years
            )));
        }
        Ok(())
    }
}

fn required_text(field: &str, value: &str, max_len: Option<usize>) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    if let Some(max) = max_len {
        if trimmed.chars().count() > max {
            return Err(AppError::Validation(format!("{field} exceeds {max} characters")));
        }
    }
    Ok(trimmed.to_string())
}

pub fn person(payload: PersonPayload, current_year: i32) -> AppResult<PersonPayload> {
    let name = required_text("name", &payload.name, Some(MAX_NAME_LEN))?;
    if let Some(year) = payload.birth_year {
        year_not_in_future("birth_year", year, current_year)?;
    }
    Ok(PersonPayload { name, birth_year: payload.birth_year })
}

pub fn actor(
    payload: PersonPayload,
    min_age: MinAge,
    current_year: i32,
) -> AppResult<PersonPayload> {
    let payload = person(payload, current_year)?;
    if let Some(year) = payload.birth_year {
        min_age.check(year, current_year)?;
    }
    Ok(payload)
}

pub fn movie(payload: MoviePayload, current_year: i32) -> AppResult<MoviePayload> {
    let name = required_text("name", &payload.name, Some(MAX_NAME_LEN))?;
    let description = required_text("description", &payload.description, None)?;
    if !payload.duration_in_min.is_finite() || payload.duration_in_min <= 0.0 {
        return Err(AppError::Validation("duration_in_min must be a positive number".into()));
    }
    year_not_in_future("release_year", payload.release_year, current_year)?;

    let pic_url = match payload.pic_url.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(url) => {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Validation("pic_url must be an http(s) URL".into()));
            }
            if url.len() > MAX_URL_LEN {
                return Err(AppError::Validation(format!(
                    "pic_url exceeds {MAX_URL_LEN} characters"
                )));
            }
            Some(url.to_string())
        }
    };

    Ok(MoviePayload { name, description, pic_url, ..payload })
}

pub fn cast(payload: CastPayload) -> AppResult<CastPayload> {
    if payload.salary < 0 {
        return Err(AppError::Validation("salary must not be negative".into()));
    }
    Ok(payload)
}

/// Upper-cases the nomination and enforces that only acting categories name
/// an actor.
pub fn oscar(payload: OscarPayload) -> AppResult<OscarPayload> {
    let nomination = normalize_nomination(&payload.nomination);
    if nomination.is_empty() {
        return Err(AppError::Validation("nomination must not be empty".into()));
    }
    if nomination.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!("nomination exceeds {MAX_NAME_LEN} characters")));
    }
    if payload.actor_id.is_some() && !ACTING_NOMINATIONS.contains(&nomination.as_str()) {
        return Err(AppError::NotAcceptable(
            "actor_id should be passed only if the nomination requires it".into(),
        ));
    }
    Ok(OscarPayload { nomination, ..payload })
}
