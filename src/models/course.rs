/// Course row. Not serialized directly: the API shape renames `teacher_id`
/// and carries the membership list, see [`crate::dto::CourseDto`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
}
