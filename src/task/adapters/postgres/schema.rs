//! Diesel table declarations for task storage.
//!
//! Tables are owned and migrated by the storage collaborator; these
//! declarations only describe the columns the repository reads and writes.

diesel::table! {
    /// Task categories.
    categories (id) {
        /// Category identifier.
        id -> Int8,
        /// Category name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Registered tasks.
    tasks (id) {
        /// Task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Owning category.
        category_id -> Int8,
        /// Due date.
        due_date -> Date,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion status.
        completed -> Bool,
    }
}

diesel::joinable!(tasks -> categories (category_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, categories);
