//! Notes stylesheet, injected once from the root component

pub const NOTES_STYLES: &str = r#"
:root {
    --app-bg: #0f172a;
    --surface-bg: #1f2937;
    --titlebar-bg: #111827;
    --input-bg: #0f172a;
    --border-color: #374151;
    --accent-bg: #3b82f6;
    --danger-bg: #dc2626;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #6b7280;
}

body {
    margin: 0;
    background: var(--app-bg);
    color: var(--text-primary);
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
}

.app-container {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

/* ── Header ── */
.header {
    background: var(--titlebar-bg);
    border-bottom: 1px solid var(--border-color);
}

.header-content {
    max-width: 72rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    flex-wrap: wrap;
}

.logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.logo-icon {
    font-size: 1.75rem;
}

.logo-text h1 {
    margin: 0;
    font-size: 1.25rem;
}

.logo-text p {
    margin: 0;
    font-size: 0.75rem;
    color: var(--text-secondary);
}

.header-right {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.org-switcher {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    background: var(--input-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.375rem;
    padding: 0.375rem 0.625rem;
}

.org-switcher input {
    background: transparent;
    border: none;
    outline: none;
    color: var(--text-primary);
    font-size: 0.875rem;
    width: 9rem;
}

/* ── Buttons ── */
.btn-primary {
    display: inline-flex;
    align-items: center;
    gap: 0.375rem;
    background: var(--accent-bg);
    border: none;
    color: white;
    cursor: pointer;
    padding: 0.5rem 0.875rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
}

.btn-primary:disabled {
    opacity: 0.6;
    cursor: default;
}

.btn-secondary {
    background: transparent;
    border: 1px solid var(--border-color);
    color: var(--text-secondary);
    cursor: pointer;
    padding: 0.5rem 0.875rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
}

/* ── Main column ── */
.main-content {
    flex: 1;
    width: 100%;
    max-width: 72rem;
    margin: 0 auto;
    padding: 1.5rem;
    box-sizing: border-box;
}

.search-section {
    margin-bottom: 1.5rem;
}

.search-bar {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 0.625rem 0.875rem;
}

.search-bar input {
    flex: 1;
    background: transparent;
    border: none;
    outline: none;
    color: var(--text-primary);
    font-size: 0.875rem;
}

/* ── Error banner ── */
.error-banner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
    padding: 0.75rem 1rem;
    margin-bottom: 1.5rem;
    background: #7f1d1d;
    color: #fecaca;
    font-size: 0.875rem;
    border: 1px solid #991b1b;
    border-radius: 0.5rem;
}

.error-banner button {
    background: transparent;
    border: none;
    color: #fecaca;
    cursor: pointer;
    font-size: 0.875rem;
}

/* ── Note form ── */
.note-form-container {
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 1.25rem;
    margin-bottom: 1.5rem;
}

.form-header h2 {
    margin: 0 0 1rem 0;
    font-size: 1.125rem;
}

.form-group {
    margin-bottom: 0.875rem;
}

.form-input,
.form-textarea {
    width: 100%;
    box-sizing: border-box;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: 0.375rem;
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
    font-family: inherit;
}

.form-textarea {
    resize: vertical;
}

.form-actions {
    display: flex;
    gap: 0.5rem;
}

/* ── Loading ── */
.loading-container {
    display: flex;
    justify-content: center;
    padding: 3rem;
}

.spinner {
    width: 2rem;
    height: 2rem;
    border: 3px solid var(--border-color);
    border-top-color: var(--accent-bg);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* ── Notes grid ── */
.notes-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 1rem;
}

.note-card {
    display: flex;
    flex-direction: column;
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 1rem;
}

.note-header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 0.5rem;
}

.note-title {
    margin: 0;
    font-size: 1rem;
    word-break: break-word;
}

.note-actions {
    display: flex;
    gap: 0.25rem;
}

.action-btn {
    background: transparent;
    border: none;
    cursor: pointer;
    font-size: 0.875rem;
    padding: 0.25rem;
    border-radius: 0.25rem;
}

.action-btn:hover {
    background: var(--border-color);
}

.note-content {
    flex: 1;
    margin: 0.75rem 0;
    font-size: 0.875rem;
    color: var(--text-secondary);
    white-space: pre-wrap;
    word-break: break-word;
}

.note-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    font-size: 0.75rem;
    color: var(--text-muted);
}

/* ── Empty state ── */
.empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    padding: 3rem 1rem;
    text-align: center;
    color: var(--text-muted);
}

.empty-icon {
    font-size: 3rem;
}

.empty-state h3 {
    margin: 0;
    color: var(--text-secondary);
}

.empty-state p {
    margin: 0 0 0.75rem 0;
    font-size: 0.875rem;
}

/* ── Dialog overlay ── */
.dialog-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.dialog-box {
    background: var(--surface-bg);
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 1.5rem;
    min-width: 320px;
    max-width: 90vw;
}

.dialog-box h3 {
    margin: 0 0 0.5rem 0;
    font-size: 1.125rem;
}

.dialog-box p {
    margin: 0 0 1rem 0;
    font-size: 0.875rem;
    color: var(--text-secondary);
}

.dialog-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
}

.btn-danger {
    background: var(--danger-bg);
    border: none;
    color: white;
    cursor: pointer;
    padding: 0.375rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
}
"#;
