//! Встроенный набор записей для режима без внешнего хранилища

use contracts::domain::a001_user::UserRecord;

/// (name, email, classification, created_at)
const DEMO_ROWS: [(&str, &str, &str, &str); 25] = [
    ("alice johnson", "alice.johnson@example.com", "admin", "2024-01-03T09:15:00+00:00"),
    ("bob smith", "bob.smith@example.com", "user", "2024-01-07T11:40:00+00:00"),
    ("carol white", "carol.white@example.com", "moderator", "2024-01-12T14:05:00+00:00"),
    ("david brown", "david.brown@example.com", "user", "2024-01-18T08:30:00+00:00"),
    ("eve davis", "eve.davis@example.com", "user", "2024-01-23T16:20:00+00:00"),
    ("frank miller", "frank.miller@example.com", "admin", "2024-02-01T10:00:00+00:00"),
    ("grace wilson", "grace.wilson@example.com", "user", "2024-02-06T13:45:00+00:00"),
    ("henry moore", "henry.moore@example.com", "user", "2024-02-11T09:10:00+00:00"),
    ("irene taylor", "irene.taylor@example.com", "moderator", "2024-02-17T15:35:00+00:00"),
    ("jack anderson", "jack.anderson@example.com", "user", "2024-02-22T12:25:00+00:00"),
    ("karen thomas", "karen.thomas@example.com", "user", "2024-03-02T07:50:00+00:00"),
    ("leo jackson", "leo.jackson@example.com", "user", "2024-03-08T18:05:00+00:00"),
    ("mia martin", "mia.martin@example.com", "user", "2024-03-14T10:40:00+00:00"),
    ("nathan lee", "nathan.lee@example.com", "user", "2024-03-19T14:15:00+00:00"),
    ("olivia perez", "olivia.perez@example.com", "admin", "2024-03-25T09:55:00+00:00"),
    ("paul thompson", "paul.thompson@example.com", "user", "2024-04-01T11:30:00+00:00"),
    ("quinn harris", "quinn.harris@example.com", "user", "2024-04-06T16:45:00+00:00"),
    ("rachel clark", "rachel.clark@example.com", "user", "2024-04-12T08:20:00+00:00"),
    ("sam lewis", "sam.lewis@example.com", "user", "2024-04-18T13:05:00+00:00"),
    ("tina walker", "tina.walker@example.com", "user", "2024-04-23T10:35:00+00:00"),
    ("umar hall", "umar.hall@example.com", "user", "2024-05-02T15:50:00+00:00"),
    ("vera allen", "vera.allen@example.com", "user", "2024-05-09T09:25:00+00:00"),
    ("will young", "will.young@example.com", "user", "2024-05-15T12:10:00+00:00"),
    ("xena king", "xena.king@example.com", "user", "2024-05-21T17:40:00+00:00"),
    ("yuri wright", "yuri.wright@example.com", "user", "2024-05-28T11:00:00+00:00"),
];

pub fn demo_users() -> Vec<UserRecord> {
    DEMO_ROWS
        .iter()
        .enumerate()
        .map(|(i, (name, email, phone, created_at))| UserRecord {
            id: (i + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            created_at: created_at.to_string(),
        })
        .collect()
}
