use serde::de::IgnoredAny;
use shared::models::{
    BlogPost, ContactForm, Faq, Feature, NewsletterSubscription, PricingPlan, Testimonial,
};
use shared::BlogQuery;
use shared::request::with_query;
use urlencoding::encode;
use validator::Validate;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::types::Public;

/// `/content` marketing content (public only)
#[derive(Debug)]
pub struct ContentApi<'a> {
    client: &'a ApiClient<Public>,
}

/// `/contact` (public only)
#[derive(Debug)]
pub struct ContactApi<'a> {
    client: &'a ApiClient<Public>,
}

/// `/newsletter` (public only)
#[derive(Debug)]
pub struct NewsletterApi<'a> {
    client: &'a ApiClient<Public>,
}

impl ApiClient<Public> {
    pub fn content(&self) -> ContentApi<'_> {
        ContentApi { client: self }
    }

    pub fn contact(&self) -> ContactApi<'_> {
        ContactApi { client: self }
    }

    pub fn newsletter(&self) -> NewsletterApi<'_> {
        NewsletterApi { client: self }
    }
}

impl ContentApi<'_> {
    pub async fn features(&self) -> ClientResult<Vec<Feature>> {
        Ok(self.client.get("/content/features").await?.data)
    }

    pub async fn pricing(&self) -> ClientResult<Vec<PricingPlan>> {
        Ok(self.client.get("/content/pricing").await?.data)
    }

    pub async fn testimonials(&self) -> ClientResult<Vec<Testimonial>> {
        Ok(self.client.get("/content/testimonials").await?.data)
    }

    pub async fn faqs(&self) -> ClientResult<Vec<Faq>> {
        Ok(self.client.get("/content/faqs").await?.data)
    }

    pub async fn blog(&self, query: &BlogQuery) -> ClientResult<Vec<BlogPost>> {
        let path = with_query("/content/blog", &query.to_query_string());
        Ok(self.client.get(&path).await?.data)
    }

    pub async fn blog_post(&self, slug: &str) -> ClientResult<BlogPost> {
        Ok(self.client.get(&format!("/content/blog/{}", encode(slug))).await?.data)
    }
}

impl ContactApi<'_> {
    /// Validate and submit the contact form
    pub async fn submit(&self, form: &ContactForm) -> ClientResult<()> {
        form.validate()?;
        self.client.post::<IgnoredAny, _>("/contact", Some(form)).await?;
        Ok(())
    }
}

impl NewsletterApi<'_> {
    pub async fn subscribe(&self, email: &str) -> ClientResult<()> {
        self.send("/newsletter/subscribe", email).await
    }

    pub async fn unsubscribe(&self, email: &str) -> ClientResult<()> {
        self.send("/newsletter/unsubscribe", email).await
    }

    async fn send(&self, endpoint: &str, email: &str) -> ClientResult<()> {
        let body = NewsletterSubscription {
            email: email.to_string(),
        };
        body.validate()?;
        self.client.post::<IgnoredAny, _>(endpoint, Some(&body)).await?;
        Ok(())
    }
}
