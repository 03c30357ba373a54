//! Search service
//!
//! Tag-filtered, paginated post feed: parse the raw search string, count
//! matches, slice one page of ids, then batch-hydrate posts and tags.

use tracing::instrument;

use blog_core::value_objects::{PageInfo, PageRequest, SearchQuery};

use crate::dto::{PostSummaryResponse, PostsPageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Search service
pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    /// Create a new SearchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of the post feed matching a raw search string.
    ///
    /// An empty search matches every post. Requesting a page past the last
    /// one is an error rather than an empty result, so a stale pager link
    /// surfaces instead of silently rendering nothing.
    #[instrument(skip(self))]
    pub async fn search_posts(
        &self,
        search: &str,
        page_number: i64,
        page_size: i64,
    ) -> ServiceResult<PostsPageResponse> {
        let query = SearchQuery::parse(search);
        let request = PageRequest::new(page_number, page_size)?;

        let total = self.ctx.post_repo().count(&query).await?;
        let info = PageInfo::compute(total, &request);
        if info.is_out_of_range(&request) {
            return Err(ServiceError::validation(format!(
                "Page {page_number} is out of range, last page is {}",
                info.last_page
            )));
        }

        let ids = self
            .ctx
            .post_repo()
            .find_ids(&query, request.size, request.offset())
            .await?;

        // Two batched round trips hydrate the whole page
        let mut posts = self.ctx.post_repo().find_by_ids(&ids).await?;
        let mut tags = self.ctx.tag_repo().find_by_post_ids(&ids).await?;
        for post in &mut posts {
            if let Some(post_tags) = tags.remove(&post.id) {
                post.tags = post_tags;
            }
        }

        Ok(PostsPageResponse {
            posts: posts.iter().map(PostSummaryResponse::from).collect(),
            page_number: request.number,
            page_size: request.size,
            has_prev: info.has_prev,
            has_next: info.has_next,
            last_page: info.last_page,
        })
    }
}
