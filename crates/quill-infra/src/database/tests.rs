#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresBlogpostRepository, PostgresUserRepository};
    use quill_core::domain::Blogpost;
    use quill_core::ports::{BaseRepository, BlogpostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let author_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                title: "Test Post".to_owned(),
                body: "Content".to_owned(),
                date: now.into(),
                author_id,
                edited: false,
                last_edit: None,
            }]])
            .into_connection();

        let repo = PostgresBlogpostRepository::new(db);

        let result: Option<Blogpost> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
        assert_eq!(found.author, author_id);
        assert!(!found.edited);
        assert!(found.last_edit.is_none());
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "alice".to_owned(),
                password_hash: "$argon2id$...".to_owned(),
                is_superuser: false,
                date_joined: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, user_id);
        assert_eq!(found.username, "alice");
        assert!(!found.is_superuser);
    }

    #[tokio::test]
    async fn test_repositories_share_one_connection() {
        // Both repositories are handed the same pool handle; the connection
        // type itself never needs to be cloned.
        let user_id = uuid::Uuid::new_v4();
        let post_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "alice".to_owned(),
                password_hash: "$argon2id$...".to_owned(),
                is_superuser: false,
                date_joined: now.into(),
            }]])
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                title: "Test Post".to_owned(),
                body: "Content".to_owned(),
                date: now.into(),
                author_id: user_id,
                edited: false,
                last_edit: None,
            }]])
            .into_connection();

        let conn = std::sync::Arc::new(db);
        let users = PostgresUserRepository::new(conn.clone());
        let posts = PostgresBlogpostRepository::new(conn);

        let user = users.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(user.id, user_id);

        let post: Option<Blogpost> = posts.find_by_id(post_id).await.unwrap();
        assert_eq!(post.unwrap().id, post_id);
    }

    #[tokio::test]
    async fn test_list_posts() {
        let author_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let rows: Vec<post::Model> = (0..3)
            .map(|i| post::Model {
                id: uuid::Uuid::new_v4(),
                title: format!("Post {i}"),
                body: "Content".to_owned(),
                date: now.into(),
                author_id,
                edited: false,
                last_edit: None,
            })
            .collect();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = PostgresBlogpostRepository::new(db);

        let posts = repo.list().await.unwrap();
        assert_eq!(posts.len(), 3);
    }
}
