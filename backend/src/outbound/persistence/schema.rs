//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Catalogue courses.
    ///
    /// `(site, url)` carries a unique constraint so re-imports upsert
    /// instead of duplicating rows.
    courses (id) {
        id -> Uuid,
        site -> Varchar,
        title -> Varchar,
        instructor -> Varchar,
        description -> Text,
        url -> Varchar,
        price -> Numeric,
        rating -> Numeric,
        thumbnail_url -> Varchar,
        is_package -> Bool,
        is_free -> Bool,
        enrollment_count -> Int8,
        upload_date -> Date,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Normalized tags; `name` is unique.
    tags (id) {
        id -> Uuid,
        name -> Varchar,
    }
}

diesel::table! {
    /// Course-to-tag associations.
    course_tags (course_id, tag_id) {
        course_id -> Uuid,
        tag_id -> Uuid,
    }
}

diesel::table! {
    /// User accounts referenced by reactions and interests.
    users (id) {
        id -> Uuid,
        display_name -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Like membership; mutually exclusive with `course_dislikes` per user.
    course_likes (course_id, user_id) {
        course_id -> Uuid,
        user_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Dislike membership; mutually exclusive with `course_likes` per user.
    course_dislikes (course_id, user_id) {
        course_id -> Uuid,
        user_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Wishlist edges between user profiles and courses.
    user_interests (user_id, course_id) {
        user_id -> Uuid,
        course_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(course_tags -> courses (course_id));
diesel::joinable!(course_tags -> tags (tag_id));
diesel::joinable!(course_likes -> courses (course_id));
diesel::joinable!(course_likes -> users (user_id));
diesel::joinable!(course_dislikes -> courses (course_id));
diesel::joinable!(course_dislikes -> users (user_id));
diesel::joinable!(user_interests -> courses (course_id));
diesel::joinable!(user_interests -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    courses,
    tags,
    course_tags,
    users,
    course_likes,
    course_dislikes,
    user_interests,
);
