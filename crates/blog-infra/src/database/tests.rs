#[cfg(test)]
mod tests {
    use crate::database::entity::blog_post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use blog_core::domain::{NewBlogPost, PostChanges};
    use blog_core::error::RepoError;
    use blog_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

    // `DatabaseConnection` is not `Clone` under sea-orm's `mock` feature;
    // share the underlying mock connection so the test keeps a log handle.
    fn share(db: &DatabaseConnection) -> DatabaseConnection {
        match db {
            DatabaseConnection::MockDatabaseConnection(conn) => {
                DatabaseConnection::MockDatabaseConnection(conn.clone())
            }
            _ => unreachable!("tests use mock connections"),
        }
    }

    fn model(id: uuid::Uuid, author: &str, title: &str) -> blog_post::Model {
        blog_post::Model {
            id,
            author: author.to_owned(),
            title: title.to_owned(),
            content: Some("Content".to_owned()),
            created: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Ada", "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let inserted = model(uuid::Uuid::new_v4(), "A", "T");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .into_connection();
        let repo = PostgresPostRepository::new(db);

        let new_post =
            NewBlogPost::new(Some("A".into()), Some("T".into()), Some("C".into()), None).unwrap();
        let post = repo.create(new_post).await.unwrap();

        assert_eq!(post.id, inserted.id);
        assert_eq!(post.author, "A");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PostgresPostRepository::new(db);

        let changes = PostChanges::new(Some("B".into()), None, None).unwrap();
        let result = repo.update_by_id(uuid::Uuid::new_v4(), changes).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_returns_refreshed_row() {
        let post_id = uuid::Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![model(post_id, "michelle manzo", "this is a title")]])
            .into_connection();
        let repo = PostgresPostRepository::new(db);

        let changes = PostChanges::new(
            Some("michelle manzo".into()),
            Some("this is a title".into()),
            None,
        )
        .unwrap();
        let post = repo.update_by_id(post_id, changes).await.unwrap();

        assert_eq!(post.author, "michelle manzo");
        assert_eq!(post.title, "this is a title");
    }

    #[tokio::test]
    async fn test_delete_reports_prior_existence() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PostgresPostRepository::new(db);
        let id = uuid::Uuid::new_v4();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_orders_by_created_then_id() {
        let older = model(uuid::Uuid::new_v4(), "A", "older");
        let newer = model(uuid::Uuid::new_v4(), "B", "newer");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![older.clone(), newer.clone()]])
            .into_connection();
        let repo = PostgresPostRepository::new(share(&db));

        let posts = repo.find_all().await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![older.id, newer.id]);

        let log = format!("{:?}", db.into_transaction_log());
        let order_by = &log[log.find("ORDER BY").unwrap()..];
        let created_at = order_by.find(r#"created\" ASC"#).unwrap();
        let id_at = order_by.find(r#"id\" ASC"#).unwrap();
        assert!(created_at < id_at);
    }

    #[tokio::test]
    async fn test_update_without_changes_only_looks_up() {
        let post_id = uuid::Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![model(post_id, "A", "T")],
                Vec::<blog_post::Model>::new(),
            ])
            .into_connection();
        let repo = PostgresPostRepository::new(share(&db));

        let post = repo
            .update_by_id(post_id, PostChanges::default())
            .await
            .unwrap();
        assert_eq!(post.title, "T");

        let missing = repo
            .update_by_id(uuid::Uuid::new_v4(), PostChanges::default())
            .await;
        assert!(matches!(missing, Err(RepoError::NotFound)));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("UPDATE"));
    }

    #[tokio::test]
    async fn test_delete_all_reports_removed_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();
        let repo = PostgresPostRepository::new(db);

        assert_eq!(repo.delete_all().await.unwrap(), 3);
    }
}
