//! Seeded site content.

use crate::{Achievement, BlogPost, ContentStore, Project, Summary, TimelineEntry};

/// Build the store with the site's content.
pub(crate) fn content_store() -> ContentStore {
    ContentStore {
        summary: summary(),
        projects: projects(),
        timeline: timeline(),
        achievements: achievements(),
        blog_posts: blog_posts(),
    }
}

fn summary() -> Summary {
    Summary {
        headline: "Product-minded Full-Stack Developer".to_owned(),
        blurb: "I help founders and teams ship delightful user experiences by combining \
                thoughtful UX, performant frontends, and reliable APIs."
            .to_owned(),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Realtime Collaboration Suite".to_owned(),
            stack: strings(&["TypeScript", "React", "WebSockets"]),
            description: "Designed collaborative whiteboarding with presence indicators, \
                          optimistic updates, and end-to-end encryption."
                .to_owned(),
            link: Some("https://example.com/collab".to_owned()),
            github: "https://github.com/emulsazib/collab-suite".to_owned(),
        },
        Project {
            id: 2,
            title: "Data Storytelling Platform".to_owned(),
            stack: strings(&["Next.js", "D3", "Node.js"]),
            description: "Built interactive narratives for climate-tech startups, turning raw \
                          telemetry into digestible dashboards."
                .to_owned(),
            link: Some("https://example.com/story".to_owned()),
            github: "https://github.com/emulsazib/data-story".to_owned(),
        },
        Project {
            id: 3,
            title: "Creator Commerce Engine".to_owned(),
            stack: strings(&["Express", "MongoDB", "Stripe"]),
            description: "Shipped checkout flows, subscription tiers, and analytics for indie \
                          creators serving 20k+ monthly customers."
                .to_owned(),
            link: Some("https://example.com/commerce".to_owned()),
            github: "https://github.com/emulsazib/commerce-engine".to_owned(),
        },
        Project {
            id: 4,
            title: "Portfolio Demo Website".to_owned(),
            stack: strings(&["Express", "Node.js", "Vanilla JS"]),
            description: "Modern full-stack portfolio website with multi-page navigation, dark \
                          mode, and API-driven content."
                .to_owned(),
            link: None,
            github: "https://github.com/emulsazib/PortfolioDemoWeb".to_owned(),
        },
    ]
}

fn timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            year: "2024".to_owned(),
            milestone: "Led platform modernization for a sustainability startup, cutting render \
                        time by 42%."
                .to_owned(),
        },
        TimelineEntry {
            year: "2023".to_owned(),
            milestone: "Mentored 5 junior engineers and launched a design system adopted across \
                        3 product teams."
                .to_owned(),
        },
        TimelineEntry {
            year: "2022".to_owned(),
            milestone: "Scaled an IoT analytics API to ingest 2B events/day with zero downtime \
                        migrations."
                .to_owned(),
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            title: "Hackathon Winner 2024".to_owned(),
            description: "Won first place in the regional coding hackathon with a real-time \
                          collaboration tool."
                .to_owned(),
            image: "/images/Cover.jpg".to_owned(),
            date: "March 2024".to_owned(),
        },
        Achievement {
            id: 2,
            title: "Open Source Contributor".to_owned(),
            description: "Contributed to major open-source projects with 1000+ stars on GitHub."
                .to_owned(),
            image: "/images/rightabout.jpg".to_owned(),
            date: "2023".to_owned(),
        },
        Achievement {
            id: 3,
            title: "Tech Conference Speaker".to_owned(),
            description: "Presented at Web Dev Summit 2024 on modern full-stack architecture."
                .to_owned(),
            image: "/images/profile.jpg".to_owned(),
            date: "May 2024".to_owned(),
        },
        Achievement {
            id: 4,
            title: "Published Developer".to_owned(),
            description: "Authored technical articles and tutorials with 50k+ reads across \
                          platforms."
                .to_owned(),
            image: "/images/Cover.jpg".to_owned(),
            date: "2023-2024".to_owned(),
        },
    ]
}

fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Building Modern Full-Stack Applications".to_owned(),
            excerpt: "A comprehensive guide to building scalable, maintainable full-stack \
                      applications using modern technologies."
                .to_owned(),
            content: r#"# Building Modern Full-Stack Applications

Building modern full-stack applications requires a deep understanding of both frontend and backend technologies. In this post, I'll share my insights on creating scalable and maintainable applications.

## Getting Started

The first step in building a modern application is choosing the right technology stack. Consider factors like:

- Team expertise
- Project requirements
- Scalability needs
- Time constraints

## Architecture Patterns

Modern applications often follow certain architectural patterns that help with maintainability and scalability.

### Microservices vs Monolith

Choosing between microservices and monolithic architecture depends on your specific use case. Microservices offer better scalability but come with added complexity.

## Best Practices

1. **Code Quality**: Maintain clean, readable code
2. **Testing**: Write comprehensive tests
3. **Documentation**: Keep documentation up to date
4. **Performance**: Optimize for speed and efficiency

![Code Example](/images/profile.jpg)

## Conclusion

Building modern applications is an ongoing journey. Stay updated with the latest technologies and best practices."#
                .to_owned(),
            author: "Emul Sajib".to_owned(),
            date: "January 15, 2024".to_owned(),
            tags: strings(&["Full Stack", "Development", "Architecture"]),
        },
        BlogPost {
            id: 2,
            title: "The Power of Express.js and Node.js".to_owned(),
            excerpt: "Exploring why Express.js and Node.js have become the go-to choices for \
                      building fast and scalable backend services."
                .to_owned(),
            content: r#"# The Power of Express.js and Node.js

Express.js has revolutionized backend development by providing a simple yet powerful framework built on Node.js.

## Why Express.js?

Express.js offers:

- Minimalist approach
- Fast performance
- Rich middleware ecosystem
- Great community support

## Building APIs

Express makes it incredibly easy to build RESTful APIs. Here's a simple example:

```javascript
app.get('/api/users', (req, res) => {
  res.json({ users: [] });
});
```

## Middleware

One of Express's strongest features is its middleware system, which allows you to add functionality at various points in the request/response cycle.

## Conclusion

Express.js and Node.js provide a powerful combination for building modern backend services."#
                .to_owned(),
            author: "Emul Sajib".to_owned(),
            date: "February 10, 2024".to_owned(),
            tags: strings(&["Node.js", "Express", "Backend"]),
        },
        BlogPost {
            id: 3,
            title: "Modern CSS Techniques for Beautiful UIs".to_owned(),
            excerpt: "Discover advanced CSS techniques and modern approaches to creating \
                      stunning user interfaces."
                .to_owned(),
            content: r#"# Modern CSS Techniques for Beautiful UIs

Modern CSS offers powerful features that make it easier than ever to create beautiful, responsive user interfaces.

## CSS Grid and Flexbox

CSS Grid and Flexbox are game-changers for layout design. They provide:

- Flexible layouts
- Easy alignment
- Responsive design capabilities

## CSS Variables

CSS custom properties (variables) allow for:

- Theme switching
- Dynamic styling
- Better maintainability

## Animations

Modern CSS animations can create smooth, performant transitions without JavaScript.

## Conclusion

By leveraging modern CSS techniques, you can create stunning UIs that are both beautiful and performant."#
                .to_owned(),
            author: "Emul Sajib".to_owned(),
            date: "March 5, 2024".to_owned(),
            tags: strings(&["CSS", "Frontend", "Design"]),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
