//! Global CSS styles for the Visualization Gallery.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #f7f8fa;
  --surface: #ffffff;
  --border: #e2e5ea;
  --overlay: rgba(10, 14, 20, 0.88);

  /* Accent */
  --accent: #2f6fde;
  --accent-soft: rgba(47, 111, 222, 0.12);

  /* Text */
  --text-primary: #1b1f24;
  --text-secondary: #5b6470;
  --text-muted: #8a929c;

  /* Semantic */
  --ok: #2e9d5b;
  --danger: #d64545;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

.gallery-app {
  min-height: 100vh;
  padding: 2rem clamp(1rem, 4vw, 3rem);
  outline: none;
}

/* === Header === */
.gallery-header {
  margin-bottom: 1.5rem;
}

.gallery-title {
  font-size: 2rem;
  font-weight: 700;
}

.gallery-subtitle {
  color: var(--text-secondary);
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem 1rem;
  align-items: center;
  margin-bottom: 1.5rem;
}

.search-field {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  flex: 1 1 280px;
}

.search-input {
  flex: 1;
  padding: 0.55rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
  background: var(--surface);
}

.search-input:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.search-clear {
  border: none;
  background: none;
  font-size: 1.2rem;
  color: var(--text-muted);
  cursor: pointer;
}

.search-count {
  color: var(--text-muted);
  font-size: 0.875rem;
  white-space: nowrap;
}

.category-pills, .tag-chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.pill, .chip {
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-secondary);
  border-radius: 999px;
  padding: 0.3rem 0.85rem;
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.chip {
  font-size: 0.8rem;
}

.pill:hover, .chip:hover {
  border-color: var(--accent);
}

.pill.selected, .chip.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

.btn-primary, .btn-secondary {
  border-radius: 8px;
  padding: 0.45rem 1rem;
  font: inherit;
  cursor: pointer;
}

.btn-primary {
  background: var(--accent);
  color: #fff;
  border: 1px solid var(--accent);
}

.btn-secondary {
  background: transparent;
  color: inherit;
  border: 1px solid currentColor;
}

/* === Grid === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.gallery-item {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  opacity: 0;
  animation: itemFadeIn 0.5s ease-out forwards;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery-item:hover, .gallery-item:focus-visible {
  transform: translateY(-3px);
  box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
  outline: none;
}

.gallery-item-image {
  aspect-ratio: 4 / 3;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #fbfbfc;
  border-bottom: 1px solid var(--border);
}

.gallery-item-image img {
  max-width: 100%;
  max-height: 100%;
  object-fit: contain;
}

.gallery-item-placeholder {
  color: #999;
  font-size: 14px;
}

.gallery-item-info {
  padding: 0.8rem 1rem;
}

.gallery-item-title {
  font-size: 1.05rem;
}

.gallery-item-category {
  color: var(--text-muted);
  font-size: 0.85rem;
}

.gallery-empty {
  padding: 3rem 1rem;
  text-align: center;
  color: var(--text-secondary);
  border: 1px dashed var(--border);
  border-radius: 12px;
}

@keyframes itemFadeIn {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: var(--overlay);
  color: #f1f3f5;
  animation: lightboxIn var(--transition-normal);
}

.lightbox-content {
  max-width: min(1100px, 86vw);
  max-height: 92vh;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.lightbox-image {
  max-width: 100%;
  max-height: 68vh;
  object-fit: contain;
  background: #fff;
  border-radius: 8px;
}

.lightbox-caption h3 {
  font-size: 1.3rem;
}

.lightbox-description {
  color: rgba(241, 243, 245, 0.8);
}

.lightbox-counter {
  font-size: 0.8rem;
  color: rgba(241, 243, 245, 0.6);
}

.lightbox-actions {
  display: flex;
  gap: 0.5rem;
}

.lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  font-size: 2rem;
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
}

.lightbox-nav {
  font-size: 2.5rem;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: none;
  background: rgba(255, 255, 255, 0.1);
  color: inherit;
  cursor: pointer;
}

.lightbox-nav:hover {
  background: rgba(255, 255, 255, 0.2);
}

.action-feedback {
  font-size: 0.875rem;
}

.action-feedback.ok {
  color: var(--ok);
}

.action-feedback.error {
  color: var(--danger);
}

@keyframes lightboxIn {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
