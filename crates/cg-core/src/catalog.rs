//! Static catalog of candidate repositories.
//!
//! Popular, public repositories across the languages the extension map
//! recognizes. Rows are `(owner, name, primary_language, blurb)`.

use crate::entities::RepositoryRef;

const CATALOG: &[(&str, &str, &str, &str)] = &[
    ("lodash", "lodash", "JavaScript", "A modern JavaScript utility library delivering modularity, performance, & extras."),
    ("facebook", "react", "JavaScript", "A declarative, efficient, and flexible JavaScript library for building user interfaces."),
    ("expressjs", "express", "JavaScript", "Fast, unopinionated, minimalist web framework for Node.js"),
    ("axios", "axios", "JavaScript", "Promise based HTTP client for the browser and node.js"),
    ("nodejs", "node", "JavaScript", "Node.js JavaScript runtime"),
    ("vercel", "next.js", "JavaScript", "The React Framework"),
    ("vuejs", "vue", "JavaScript", "Vue.js is a progressive, incrementally-adoptable JavaScript framework for building UI on the web."),
    ("tailwindlabs", "tailwindcss", "JavaScript", "A utility-first CSS framework for rapid UI development."),
    ("tensorflow", "tensorflow", "Python", "An open source machine learning framework for everyone"),
    ("pytorch", "pytorch", "Python", "Tensors and Dynamic neural networks in Python with strong GPU acceleration"),
    ("django", "django", "Python", "The Web framework for perfectionists with deadlines."),
    ("pallets", "flask", "Python", "The Python micro framework for building web applications."),
    ("rust-lang", "rust", "Rust", "Empowering everyone to build reliable and efficient software."),
    ("golang", "go", "Go", "The Go programming language"),
    ("spring-projects", "spring-boot", "Java", "Spring Boot helps you to create Spring-powered, production-grade applications and services."),
    ("laravel", "laravel", "PHP", "A PHP framework for web artisans"),
    ("dotnet", "aspnetcore", "C#", "ASP.NET Core is a cross-platform .NET framework for building modern cloud-based web applications."),
    ("kubernetes", "kubernetes", "Go", "Production-Grade Container Scheduling and Management"),
    ("rails", "rails", "Ruby", "Ruby on Rails is a full-stack web framework optimized for programmer happiness and sustainable productivity."),
    ("redis", "redis", "C", "An in-memory database that persists on disk."),
    ("angular", "angular", "TypeScript", "The modern web developer's platform"),
    ("sveltejs", "svelte", "TypeScript", "Cybernetically enhanced web apps"),
    ("facebook", "react-native", "JavaScript", "A framework for building native applications using React"),
    ("reduxjs", "redux", "TypeScript", "Predictable state container for JavaScript apps"),
    ("storybookjs", "storybook", "TypeScript", "The UI component explorer. Develop, document, & test React, Vue, Angular, Web Components, Ember, Svelte & more!"),
    ("nestjs", "nest", "TypeScript", "A progressive Node.js framework for building efficient and scalable server-side applications."),
    ("gatsbyjs", "gatsby", "TypeScript", "Build blazing fast, modern apps and websites with React"),
    ("nuxt", "nuxt", "TypeScript", "The Intuitive Vue Framework"),
    ("remix-run", "remix", "TypeScript", "Build better websites with Remix"),
    ("prisma", "prisma", "TypeScript", "Next-generation ORM for Node.js & TypeScript"),
    ("scikit-learn", "scikit-learn", "Python", "Machine Learning in Python"),
    ("pandas-dev", "pandas", "Python", "Flexible and powerful data analysis / manipulation library for Python"),
    ("numpy", "numpy", "Python", "The fundamental package for scientific computing with Python"),
    ("matplotlib", "matplotlib", "Python", "Matplotlib: visualization with Python"),
    ("fastapi", "fastapi", "Python", "FastAPI framework, high performance, easy to learn, fast to code, ready for production"),
    ("tiangolo", "fastapi", "Python", "FastAPI framework, high performance, easy to learn, fast to code, ready for production"),
    ("huggingface", "transformers", "Python", "Transformers: State-of-the-art Machine Learning for Pytorch, TensorFlow, and JAX."),
    ("psf", "requests", "Python", "A simple, yet elegant, HTTP library for Python."),
    ("scrapy", "scrapy", "Python", "Scrapy, a fast high-level web crawling & scraping framework for Python."),
    ("pytest-dev", "pytest", "Python", "The pytest framework makes it easy to write small tests, yet scales to support complex functional testing"),
    ("elastic", "elasticsearch", "Java", "Free and Open, Distributed, RESTful Search Engine"),
    ("apache", "kafka", "Java", "Mirror of Apache Kafka"),
    ("google", "guava", "Java", "Google core libraries for Java"),
    ("square", "retrofit", "Java", "A type-safe HTTP client for Android and the JVM"),
    ("square", "okhttp", "Java", "Square's meticulous HTTP client for the JVM, Android, and GraalVM."),
    ("apache", "hadoop", "Java", "Apache Hadoop"),
    ("spring-projects", "spring-framework", "Java", "Spring Framework"),
    ("ReactiveX", "RxJava", "Java", "RxJava Reactive Extensions for the JVM"),
    ("junit-team", "junit5", "Java", "The next generation of JUnit."),
    ("netty", "netty", "Java", "Netty project - an event-driven asynchronous network application framework"),
    ("gin-gonic", "gin", "Go", "Gin is a HTTP web framework written in Go (Golang). It features a Martini-like API with much better performance -- up to 40 times faster."),
    ("gofiber", "fiber", "Go", "Express inspired web framework written in Go"),
    ("moby", "moby", "Go", "Moby Project - a collaborative project for the container ecosystem to assemble container-based systems"),
    ("etcd-io", "etcd", "Go", "Distributed reliable key-value store for the most critical data of a distributed system"),
    ("hashicorp", "terraform", "Go", "Terraform enables you to safely and predictably create, change, and improve infrastructure."),
    ("prometheus", "prometheus", "Go", "The Prometheus monitoring system and time series database."),
    ("cockroachdb", "cockroach", "Go", "CockroachDB - the open source, cloud-native distributed SQL database."),
    ("traefik", "traefik", "Go", "The Cloud Native Application Proxy"),
    ("gohugoio", "hugo", "Go", "The world's fastest framework for building websites."),
    ("grafana", "grafana", "Go", "The open and composable observability and data visualization platform."),
    ("denoland", "deno", "Rust", "A modern runtime for JavaScript and TypeScript."),
    ("alacritty", "alacritty", "Rust", "A cross-platform, OpenGL terminal emulator."),
    ("tauri-apps", "tauri", "Rust", "Build smaller, faster, and more secure desktop applications with a web frontend."),
    ("starship", "starship", "Rust", "The minimal, blazing-fast, and infinitely customizable prompt for any shell!"),
    ("yewstack", "yew", "Rust", "Rust / Wasm framework for building client web apps"),
    ("tokio-rs", "tokio", "Rust", "A runtime for writing reliable asynchronous applications with Rust."),
    ("seanmonstar", "reqwest", "Rust", "An easy and powerful Rust HTTP Client"),
    ("diesel-rs", "diesel", "Rust", "A safe, extensible ORM and Query Builder for Rust"),
    ("actix", "actix-web", "Rust", "Actix Web is a powerful, pragmatic, and extremely fast web framework for Rust."),
    ("clap-rs", "clap", "Rust", "A full featured, fast Command Line Argument Parser for Rust"),
    ("electron", "electron", "C++", "Build cross-platform desktop apps with JavaScript, HTML, and CSS"),
    ("opencv", "opencv", "C++", "Open Source Computer Vision Library"),
    ("protocolbuffers", "protobuf", "C++", "Protocol Buffers - Google's data interchange format"),
    ("bitcoin", "bitcoin", "C++", "Bitcoin Core integration/staging tree"),
    ("godotengine", "godot", "C++", "Godot Engine Multi-platform 2D and 3D game engine"),
    ("llvm", "llvm-project", "C++", "The LLVM Project is a collection of modular and reusable compiler and toolchain technologies"),
    ("microsoft", "terminal", "C++", "The new Windows Terminal and the original Windows console host, all in the same place!"),
    ("google", "leveldb", "C++", "LevelDB is a fast key-value storage library written at Google that provides an ordered mapping from string keys to string values."),
    ("nlohmann", "json", "C++", "JSON for Modern C++"),
    ("dotnet", "runtime", "C#", ".NET is a cross-platform runtime for cloud, mobile, desktop, and IoT apps."),
    ("PowerShell", "PowerShell", "C#", "PowerShell for every system!"),
    ("dotnet", "efcore", "C#", "EF Core is a modern object-database mapper for .NET."),
    ("AvaloniaUI", "Avalonia", "C#", "A cross-platform UI framework for .NET"),
    ("jstedfast", "MailKit", "C#", "A cross-platform .NET library for IMAP, POP3, and SMTP."),
    ("dotnet", "maui", "C#", ".NET MAUI is the .NET Multi-platform App UI, a framework for building native device applications spanning mobile, tablet, and desktop."),
    ("SignalR", "SignalR", "C#", "Incredibly simple real-time web for .NET"),
    ("xunit", "xunit", "C#", "xUnit.net is a free, open source, community-focused unit testing tool for the .NET Framework."),
    ("serilog", "serilog", "C#", "Simple .NET logging with fully-structured events"),
    ("AutoMapper", "AutoMapper", "C#", "A convention-based object-object mapper in .NET."),
    ("jekyll", "jekyll", "Ruby", "Jekyll is a blog-aware static site generator in Ruby"),
    ("discourse", "discourse", "Ruby", "A platform for community discussion. Free, open, simple."),
    ("fastlane", "fastlane", "Ruby", "The easiest way to automate building and releasing your iOS and Android apps"),
    ("Homebrew", "brew", "Ruby", "The missing package manager for macOS (or Linux)"),
    ("rspec", "rspec-rails", "Ruby", "RSpec for Rails-5+"),
    ("symfony", "symfony", "PHP", "The Symfony PHP framework"),
    ("composer", "composer", "PHP", "Dependency Manager for PHP"),
    ("guzzle", "guzzle", "PHP", "Guzzle, an extensible PHP HTTP client"),
    ("phpunit", "phpunit", "PHP", "The PHP Unit Testing framework"),
    ("yiisoft", "yii2", "PHP", "Yii 2: The Fast, Secure and Professional PHP Framework"),
    ("apple", "swift", "Swift", "The Swift Programming Language"),
    ("Alamofire", "Alamofire", "Swift", "Elegant HTTP Networking in Swift"),
    ("Moya", "Moya", "Swift", "Network abstraction layer written in Swift"),
    ("ReactiveX", "RxSwift", "Swift", "Reactive Programming in Swift"),
    ("SwiftyJSON", "SwiftyJSON", "Swift", "The better way to deal with JSON data in Swift"),
    ("JetBrains", "kotlin", "Kotlin", "The Kotlin Programming Language"),
    ("square", "okio", "Kotlin", "A modern I/O library for Android, Kotlin, and Java"),
    ("Kotlin", "kotlinx.coroutines", "Kotlin", "Library support for Kotlin coroutines"),
    ("InsertKoinIO", "koin", "Kotlin", "Koin - a pragmatic lightweight dependency injection framework for Kotlin"),
    ("ktorio", "ktor", "Kotlin", "Framework for quickly creating connected applications in Kotlin with minimal effort"),
];

/// All catalog repositories, in catalog order.
#[must_use]
pub fn catalog() -> Vec<RepositoryRef> {
    CATALOG
        .iter()
        .map(|(owner, name, language, blurb)| RepositoryRef::new(owner, name, language, blurb))
        .collect()
}

/// Catalog repositories whose primary language matches `language`
/// (case-insensitive).
#[must_use]
pub fn catalog_for_language(language: &str) -> Vec<RepositoryRef> {
    catalog()
        .into_iter()
        .filter(|repo| repo.primary_language.eq_ignore_ascii_case(language))
        .collect()
}
