//! The token stored in the auth cookie.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::UserID;

mod expiry_format {
    //! Serializes the expiry with a fixed width hour.
    //!
    //! The default [time::OffsetDateTime] serializer writes midnight as
    //! "0:00:00.0", which its own deserializer then rejects.
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{
        OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
    };

    /// e.g. "2021-01-01 00:00:00.0 +05:30:00".
    const EXPIRY_FORMAT: &[BorrowedFormatItem] = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond] [offset_hour \
             sign:mandatory]:[offset_minute]:[offset_second]"
    );

    pub fn serialize<S>(expires_at: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = expires_at
            .format(EXPIRY_FORMAT)
            .map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        OffsetDateTime::parse(&text, EXPIRY_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Identifies the logged in user until `expires_at`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Token {
    pub user_id: UserID,

    #[serde(with = "expiry_format")]
    pub expires_at: OffsetDateTime,
}
