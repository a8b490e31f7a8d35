use super::{Profile, Project, SocialKind, SocialLink};

pub static PROFILE: Profile = Profile {
    name: "Your Name",
    headline: "AI/ML Engineer",
    tagline: "Masters student specializing in Large Language Models and Generative AI",
    about: "I'm a passionate AI engineer with 3 years of industry experience, currently \
            pursuing my Master's degree. My focus is on developing practical AI solutions \
            using Large Language Models and Generative AI technologies. I combine strong \
            technical skills with business acumen to deliver impactful AI solutions.",
    social: &[
        SocialLink {
            kind: SocialKind::GitHub,
            url: "https://github.com/yourusername",
            title: None,
        },
        SocialLink {
            kind: SocialKind::LinkedIn,
            url: "https://linkedin.com/in/yourusername",
            title: None,
        },
        SocialLink {
            kind: SocialKind::Blog,
            url: "https://medium.com/@yourusername",
            title: Some("Read my blog on Medium"),
        },
        SocialLink {
            kind: SocialKind::Mail,
            url: "mailto:your.email@example.com",
            title: None,
        },
    ],
};

pub static PROJECTS: [Project; 2] = [
    Project {
        id: "rag-system",
        title: "Advanced RAG System",
        description: "Built a domain-specific RAG system implementing hybrid search combining \
                      dense and sparse retrievals, multiple embedding models comparison, and \
                      custom evaluation metrics. The system demonstrates sophisticated document \
                      chunking strategies and efficient vector storage solutions.",
        tags: &["Python", "LangChain", "Elasticsearch", "Transformers"],
        github: "https://github.com/yourusername/rag-system",
        demo: Some("https://demo-link.com"),
        image: "/api/placeholder/800/400",
        technical_details: &[
            "Implemented hybrid search combining BM25 and dense retrievals",
            "Integrated multiple embedding models for comparison",
            "Built custom evaluation pipeline",
        ],
        features: &[
            "Smart document chunking",
            "Vector store optimization",
            "Custom relevance scoring",
        ],
        challenges: &[
            "Overcame context length limitations through smart chunking",
            "Improved search accuracy by 40% using hybrid approach",
            "Reduced latency by 60% through caching and optimization",
        ],
    },
    Project {
        id: "llm-finetuning",
        title: "LLM Fine-tuning Pipeline",
        description: "Developed an end-to-end pipeline for fine-tuning Llama 2 models. \
                      Implemented PEFT techniques, custom loss functions, and comprehensive \
                      evaluation frameworks. Achieved 25% improvement in domain-specific tasks \
                      while maintaining general capabilities.",
        tags: &["PyTorch", "Transformers", "PEFT", "MLOps"],
        github: "https://github.com/yourusername/llm-finetuning",
        demo: None,
        image: "/api/placeholder/800/400",
        technical_details: &[
            "Implemented LoRA and QLoRA fine-tuning",
            "Built custom dataset preprocessing pipeline",
            "Developed comprehensive evaluation suite",
        ],
        features: &[
            "Parameter-efficient fine-tuning",
            "Custom loss functions",
            "Automated evaluation",
        ],
        challenges: &[
            "Optimized memory usage for large models",
            "Maintained base model capabilities",
            "Automated evaluation pipeline",
        ],
    },
];
