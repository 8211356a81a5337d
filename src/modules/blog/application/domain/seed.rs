//! Posts shipped with the site. Served until an administrator stores an
//! override list.

use super::entities::BlogPost;

const BOOST_SPEED_CONTENT: &str = r#"<h2>Introduction</h2>
<p>Website speed is crucial for user experience and SEO. In 2026, with increasingly demanding users and sophisticated search algorithms, optimizing your website's performance has never been more important.</p>
<h2>Key Optimization Techniques</h2>
<p>Here are the most effective strategies to boost your website speed:</p>
<h3>1. Image Optimization</h3>
<p>Use modern image formats like WebP and AVIF. Implement lazy loading and responsive images to reduce initial page load.</p>
<h3>2. Code Minification</h3>
<p>Minify CSS, JavaScript, and HTML files to reduce file sizes and improve load times.</p>
<h3>3. Caching Strategies</h3>
<p>Implement browser caching and server-side caching to serve content faster to returning visitors.</p>
<h3>4. CDN Integration</h3>
<p>Use a Content Delivery Network to distribute your content globally and reduce latency.</p>
<h2>Conclusion</h2>
<p>By implementing these optimization techniques, you can significantly improve your website's speed and provide a better experience for your users.</p>"#;

const WORDPRESS_SECURITY_CONTENT: &str = r#"<h2>Why WordPress Security Matters</h2>
<p>WordPress powers over 40% of websites globally, making it a prime target for attackers. Implementing robust security measures is essential.</p>
<h2>Essential Security Practices</h2>
<h3>1. Keep Everything Updated</h3>
<p>Regularly update WordPress core, themes, and plugins to patch security vulnerabilities.</p>
<h3>2. Use Strong Passwords</h3>
<p>Implement strong password policies and consider two-factor authentication.</p>
<h3>3. Install Security Plugins</h3>
<p>Use reputable security plugins like Wordfence or Sucuri to add an extra layer of protection.</p>
<h3>4. Regular Backups</h3>
<p>Schedule automatic backups to ensure you can recover your site if something goes wrong.</p>
<h2>Final Thoughts</h2>
<p>Security is an ongoing process. Stay vigilant and regularly review your security measures.</p>"#;

const WHAT_IS_WORDPRESS_EXCERPT: &str = "Discover what WordPress is and why it powers 43% of all websites. Learn the benefits, features, and reasons why WordPress is the best CMS for your business website.";

pub fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            slug: "boost-website-speed-2026".to_string(),
            title: "How to Boost Your Website Speed in 2026".to_string(),
            excerpt: "Learn the latest techniques to optimize your website performance and improve user experience with cutting-edge speed optimization strategies.".to_string(),
            featured_image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f".to_string(),
            date: "2026-02-10".to_string(),
            category: "Performance".to_string(),
            content: BOOST_SPEED_CONTENT.to_string(),
        },
        BlogPost {
            id: 2,
            slug: "wordpress-security-best-practices".to_string(),
            title: "WordPress Security Best Practices".to_string(),
            excerpt: "Protect your WordPress site from threats with these essential security measures and best practices for 2026.".to_string(),
            featured_image: "https://images.unsplash.com/photo-1563986768609-322da13575f3".to_string(),
            date: "2026-02-08".to_string(),
            category: "Security".to_string(),
            content: WORDPRESS_SECURITY_CONTENT.to_string(),
        },
        BlogPost {
            id: 7,
            slug: "what-is-wordpress".to_string(),
            title: "What Is WordPress and Why Is It the Best CMS?".to_string(),
            excerpt: WHAT_IS_WORDPRESS_EXCERPT.to_string(),
            featured_image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c".to_string(),
            date: "2025-01-01".to_string(),
            category: "WordPress".to_string(),
            content: format!("<p>{WHAT_IS_WORDPRESS_EXCERPT}</p>"),
        },
    ]
}
