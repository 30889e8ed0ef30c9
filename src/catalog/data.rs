//! Curated model table

use super::CatalogEntry;

pub(super) static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "llama3.2:latest",
        family: "llama",
        size: "3.1GB",
        released: "Sep 2024",
        description: "Meta's Llama 3.2 - Latest version with improved performance and capabilities. Good for general conversation and reasoning tasks.",
    },
    CatalogEntry {
        name: "llama3.2:3b",
        family: "llama",
        size: "3.1GB",
        released: "Sep 2024",
        description: "Meta's Llama 3.2 3B parameter model. Lightweight and fast, suitable for resource-constrained environments.",
    },
    CatalogEntry {
        name: "llama3.2:1b",
        family: "llama",
        size: "1.3GB",
        released: "Sep 2024",
        description: "Meta's Llama 3.2 1B parameter model. Ultra-lightweight model for basic tasks and quick responses.",
    },
    CatalogEntry {
        name: "llama4:latest",
        family: "llama",
        size: "65.0GB",
        released: "Jan 2025",
        description: "Meta's Llama 4 Scout - 109B parameter multimodal model with vision capabilities. Latest and most advanced model from Meta.",
    },
    CatalogEntry {
        name: "llama3.1:latest",
        family: "llama",
        size: "4.7GB",
        released: "Jul 2024",
        description: "Meta's Llama 3.1 - Previous generation with strong performance. Good balance of capability and resource usage.",
    },
    CatalogEntry {
        name: "llama3.1:8b",
        family: "llama",
        size: "4.7GB",
        released: "Jul 2024",
        description: "Meta's Llama 3.1 8B parameter model. More capable than 3B version, suitable for complex tasks.",
    },
    CatalogEntry {
        name: "llama3.1:70b",
        family: "llama",
        size: "40.2GB",
        released: "Jul 2024",
        description: "Meta's Llama 3.1 70B parameter model. High-performance model for demanding tasks. Requires significant resources.",
    },
    CatalogEntry {
        name: "codellama:latest",
        family: "llama",
        size: "3.8GB",
        released: "Aug 2023",
        description: "Meta's Code Llama - Specialized for code generation, completion, and debugging. Excellent for programming tasks.",
    },
    CatalogEntry {
        name: "codellama:7b",
        family: "llama",
        size: "3.8GB",
        released: "Aug 2023",
        description: "Code Llama 7B - Specialized coding model with good performance for most programming tasks.",
    },
    CatalogEntry {
        name: "codellama:13b",
        family: "llama",
        size: "7.3GB",
        released: "Aug 2023",
        description: "Code Llama 13B - More capable coding model for complex programming tasks and code analysis.",
    },
    CatalogEntry {
        name: "codellama:34b",
        family: "llama",
        size: "19.0GB",
        released: "Aug 2023",
        description: "Code Llama 34B - High-performance coding model for advanced programming tasks. Requires significant resources.",
    },
    CatalogEntry {
        name: "mistral:latest",
        family: "mistral",
        size: "4.1GB",
        released: "Sep 2023",
        description: "Mistral 7B - Efficient and capable model from Mistral AI. Good for general tasks with lower resource requirements.",
    },
    CatalogEntry {
        name: "mistral:7b",
        family: "mistral",
        size: "4.1GB",
        released: "Sep 2023",
        description: "Mistral 7B - High-quality model with excellent performance-to-size ratio. Great for general conversation.",
    },
    CatalogEntry {
        name: "mistral-magistral:latest",
        family: "mistral",
        size: "8.2GB",
        released: "Jan 2025",
        description: "Mistral Magistral - Latest model from Mistral AI with enhanced capabilities and improved performance.",
    },
    CatalogEntry {
        name: "mistral-small-3.1:latest",
        family: "mistral",
        size: "4.1GB",
        released: "Jan 2025",
        description: "Mistral Small 3.1 - Enhanced long-context model supporting 128k tokens with improved performance.",
    },
    CatalogEntry {
        name: "mixtral:latest",
        family: "mixtral",
        size: "26.2GB",
        released: "Dec 2023",
        description: "Mixtral 8x7B - Mixture of Experts model with 8 experts. Excellent performance for complex reasoning tasks.",
    },
    CatalogEntry {
        name: "mixtral:8x7b",
        family: "mixtral",
        size: "26.2GB",
        released: "Dec 2023",
        description: "Mixtral 8x7B - Advanced mixture of experts model. High performance but requires significant resources.",
    },
    CatalogEntry {
        name: "gemma:latest",
        family: "gemma",
        size: "5.4GB",
        released: "Feb 2024",
        description: "Google's Gemma 7B - Open-source model with strong performance. Good for general tasks and research.",
    },
    CatalogEntry {
        name: "gemma:7b",
        family: "gemma",
        size: "5.4GB",
        released: "Feb 2024",
        description: "Google Gemma 7B - Efficient model with good capabilities for various tasks.",
    },
    CatalogEntry {
        name: "gemma:2b",
        family: "gemma",
        size: "1.6GB",
        released: "Feb 2024",
        description: "Google Gemma 2B - Lightweight model for basic tasks and resource-constrained environments.",
    },
    CatalogEntry {
        name: "gemma3:latest",
        family: "gemma",
        size: "8.5GB",
        released: "Jan 2025",
        description: "Google's Gemma 3 - Latest version with enhanced capabilities and vision support. Available in multiple sizes.",
    },
    CatalogEntry {
        name: "phi3:latest",
        family: "phi",
        size: "2.3GB",
        released: "Apr 2024",
        description: "Microsoft's Phi-3 - Small but capable model. Good for mobile and edge computing applications.",
    },
    CatalogEntry {
        name: "phi3:mini",
        family: "phi",
        size: "2.3GB",
        released: "Apr 2024",
        description: "Microsoft Phi-3 Mini - Compact model with surprising capabilities. Great for quick tasks.",
    },
    CatalogEntry {
        name: "phi3:medium",
        family: "phi",
        size: "14.3GB",
        released: "Apr 2024",
        description: "Microsoft Phi-3 Medium - More capable version of Phi-3. Good balance of performance and efficiency.",
    },
    CatalogEntry {
        name: "qwen2.5:latest",
        family: "qwen",
        size: "4.4GB",
        released: "Jun 2024",
        description: "Alibaba's Qwen2.5 7B - Strong multilingual model with good reasoning capabilities.",
    },
    CatalogEntry {
        name: "qwen2.5:7b",
        family: "qwen",
        size: "4.4GB",
        released: "Jun 2024",
        description: "Qwen2.5 7B - Capable model with strong multilingual support and reasoning abilities.",
    },
    CatalogEntry {
        name: "qwen2.5:14b",
        family: "qwen",
        size: "8.7GB",
        released: "Jun 2024",
        description: "Qwen2.5 14B - More powerful version with enhanced capabilities for complex tasks.",
    },
    CatalogEntry {
        name: "qwen2.5:32b",
        family: "qwen",
        size: "19.2GB",
        released: "Jun 2024",
        description: "Qwen2.5 32B - High-performance model with advanced reasoning capabilities. Requires significant resources.",
    },
    CatalogEntry {
        name: "qwen2.5-vl:latest",
        family: "qwen",
        size: "4.4GB",
        released: "Jan 2025",
        description: "Qwen2.5 VL - Vision-language model for document scanning, OCR, and multilingual translation tasks.",
    },
    CatalogEntry {
        name: "deepseek-r1:latest",
        family: "deepseek",
        size: "4.1GB",
        released: "Jan 2025",
        description: "DeepSeek-R1 - Open reasoning model with performance approaching leading models like O3 and Gemini 2.5 Pro.",
    },
    CatalogEntry {
        name: "neural-chat:latest",
        family: "neural",
        size: "4.1GB",
        released: "Nov 2023",
        description: "Intel's Neural Chat - Optimized for conversational AI with good performance on dialogue tasks.",
    },
    CatalogEntry {
        name: "orca-mini:latest",
        family: "orca",
        size: "1.9GB",
        released: "Jun 2023",
        description: "Microsoft's Orca Mini - Lightweight model trained on high-quality data. Good for educational purposes.",
    },
    CatalogEntry {
        name: "dolphin-2.6-mistral:latest",
        family: "dolphin",
        size: "4.1GB",
        released: "Dec 2023",
        description: "Dolphin 2.6 Mistral - Uncensored and helpful model based on Mistral. Good for creative and unrestricted tasks.",
    },
    CatalogEntry {
        name: "dolphin-mistral:latest",
        family: "dolphin",
        size: "4.1GB",
        released: "Nov 2023",
        description: "Dolphin Mistral 7B - Popular uncensored model based on Mistral 7B. Great for creative writing and unrestricted conversations.",
    },
    CatalogEntry {
        name: "dolphin-2.7-mixtral:latest",
        family: "dolphin",
        size: "26.2GB",
        released: "Jan 2024",
        description: "Dolphin 2.7 Mixtral - Advanced uncensored model based on Mixtral 8x7B. High performance for complex creative tasks.",
    },
    CatalogEntry {
        name: "openchat:latest",
        family: "openchat",
        size: "4.1GB",
        released: "Aug 2023",
        description: "OpenChat - Open-source conversational AI model with good dialogue capabilities.",
    },
    CatalogEntry {
        name: "starling-lm:latest",
        family: "starling",
        size: "4.1GB",
        released: "Oct 2023",
        description: "Starling LM - High-quality conversational model with strong performance on dialogue tasks.",
    },
    CatalogEntry {
        name: "wizard-vicuna:latest",
        family: "wizard",
        size: "4.1GB",
        released: "May 2023",
        description: "Wizard Vicuna - Instruction-tuned model with good performance on various tasks.",
    },
    CatalogEntry {
        name: "vicuna:latest",
        family: "vicuna",
        size: "4.1GB",
        released: "Mar 2023",
        description: "Vicuna - Open-source chat model fine-tuned from LLaMA. Good for general conversation.",
    },
    CatalogEntry {
        name: "alpaca:latest",
        family: "alpaca",
        size: "4.1GB",
        released: "Mar 2023",
        description: "Alpaca - Stanford's instruction-following model based on LLaMA. Good for following instructions.",
    },
    CatalogEntry {
        name: "nous-hermes:latest",
        family: "nous",
        size: "4.1GB",
        released: "Jul 2023",
        description: "Nous Hermes - High-quality instruction-tuned model with excellent reasoning capabilities.",
    },
    CatalogEntry {
        name: "airoboros:latest",
        family: "airoboros",
        size: "4.1GB",
        released: "Aug 2023",
        description: "Airoboros - Instruction-tuned model with strong performance on various tasks and good reasoning.",
    },
    CatalogEntry {
        name: "llava:latest",
        family: "llava",
        size: "4.1GB",
        released: "Nov 2023",
        description: "LLaVA - Large Language and Vision Assistant. Multimodal model for text and image understanding.",
    },
    CatalogEntry {
        name: "bakllava:latest",
        family: "bakllava",
        size: "4.1GB",
        released: "Oct 2023",
        description: "BakLLaVA - Enhanced vision-language model with improved multimodal capabilities.",
    },
];
